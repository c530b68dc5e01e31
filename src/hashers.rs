use sha3::{Digest as _, Keccak256};
use crate::{errors::SeederError, types::{BlockHash, Digest, TokenId, BLOCK_HASH_LEN, PACKED_LEN, WORD_LEN}};

/// P = `block_hash` || BE256(`token_id`), i.e. `abi.encodePacked(bytes32, uint256)` (64 bytes)
#[must_use]
pub fn encode_packed(block_hash: &BlockHash, token_id: &TokenId) -> [u8; PACKED_LEN] {
    let mut out = [0u8; PACKED_LEN];
    out[..BLOCK_HASH_LEN].copy_from_slice(&block_hash.0);
    out[BLOCK_HASH_LEN..].copy_from_slice(&token_id.to_be_bytes());
    out
}

/// D = KECCAK256( `block_hash` || BE256(`token_id`) )
///
/// Keccak-256 with the original padding, as computed by the EVM; not NIST SHA3-256.
#[must_use]
pub fn digest(block_hash: &BlockHash, token_id: &TokenId) -> Digest {
    let mut h = Keccak256::new();
    h.update(block_hash.0);
    h.update(token_id.to_be_bytes());
    let out: [u8; WORD_LEN] = h.finalize().into();
    Digest::from(out)
}

/// Same as [`digest`] for an unchecked block hash slice.
///
/// # Errors
///
/// Returns `SeederError::InvalidInputLength` unless `block_hash` is exactly 32 bytes.
pub fn digest_from_slice(block_hash: &[u8], token_id: &TokenId) -> Result<Digest, SeederError> {
    let block_hash = BlockHash::try_from(block_hash)?;
    Ok(digest(&block_hash, token_id))
}

/// Plain keccak256 over arbitrary bytes.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; WORD_LEN] {
    Keccak256::digest(data).into()
}
