use core::{fmt, str::FromStr};
use primitive_types::U256;
use crate::errors::SeederError;

pub const WORD_LEN: usize = 32;               // one EVM word
pub const BLOCK_HASH_LEN: usize = 32;         // bytes32
pub const PACKED_LEN: usize = BLOCK_HASH_LEN + WORD_LEN; // bytes32 || uint256
pub const DIGEST_BITS: u32 = 256;
pub const DEFAULT_FIELD_WIDTH: u32 = 48;      // uint48 casts in the seeder contract

/// Hash of the block whose entropy seeds a token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BlockHash(pub [u8; BLOCK_HASH_LEN]);

/// Output of the extractor: keccak256 over the packed preimage, read as a big-endian word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digest(U256);

/// Token identifier; always fits in one 256-bit word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenId(pub U256);

// Exact-sized decode helpers
macro_rules! impl_tryfrom_slice {
    ($t:ty, $len:expr) => {
        impl TryFrom<&[u8]> for $t {
            type Error = SeederError;
            fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
                if b.len() != $len {
                    return Err(SeederError::InvalidInputLength { expected: $len, got: b.len() });
                }
                let mut arr = [0u8; $len];
                arr.copy_from_slice(b);
                Ok(Self::from(arr))
            }
        }
    }
}
impl_tryfrom_slice!(BlockHash, BLOCK_HASH_LEN);
impl_tryfrom_slice!(Digest, WORD_LEN);

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

impl BlockHash {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_HASH_LEN] {
        &self.0
    }
}

impl From<[u8; BLOCK_HASH_LEN]> for BlockHash {
    fn from(b: [u8; BLOCK_HASH_LEN]) -> Self {
        Self(b)
    }
}

/// Parses `0x`-prefixed or bare hex; exactly 32 bytes.
impl FromStr for BlockHash {
    type Err = SeederError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_hex_prefix(s.trim());
        if digits.len() % 2 != 0 {
            return Err(SeederError::InvalidEncoding("odd number of hex digits in block hash"));
        }
        let bytes = hex::decode(digits)
            .map_err(|_| SeederError::InvalidEncoding("non-hex character in block hash"))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({self})")
    }
}

impl Digest {
    #[must_use]
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Big-endian bytes, identical to the raw keccak output.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; WORD_LEN] {
        let mut out = [0u8; WORD_LEN];
        self.0.to_big_endian(&mut out);
        out
    }
}

impl From<[u8; WORD_LEN]> for Digest {
    fn from(b: [u8; WORD_LEN]) -> Self {
        Self(U256::from_big_endian(&b))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl TokenId {
    /// Big-endian bytes of any length. Leading zero bytes are ignored; anything
    /// needing more than 32 significant bytes is rejected rather than truncated.
    pub fn from_be_slice(b: &[u8]) -> Result<Self, SeederError> {
        let start = b.iter().position(|&x| x != 0).unwrap_or(b.len());
        let significant = &b[start..];
        if significant.len() > WORD_LEN {
            return Err(SeederError::TokenIdOverflow);
        }
        Ok(Self(U256::from_big_endian(significant)))
    }

    /// The 32-byte big-endian word the contract hashes.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; WORD_LEN] {
        let mut out = [0u8; WORD_LEN];
        self.0.to_big_endian(&mut out);
        out
    }
}

macro_rules! impl_token_id_from {
    ($($t:ty),*) => {
        $(impl From<$t> for TokenId {
            fn from(v: $t) -> Self { Self(U256::from(v)) }
        })*
    }
}
impl_token_id_from!(u8, u16, u32, u64, u128);

impl From<U256> for TokenId {
    fn from(v: U256) -> Self {
        Self(v)
    }
}

/// Decimal, or hex with a `0x` prefix.
impl FromStr for TokenId {
    type Err = SeederError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            if digits.is_empty() {
                return Err(SeederError::InvalidEncoding("empty hex token id"));
            }
            let padded = if digits.len() % 2 == 0 { digits.to_owned() } else { format!("0{digits}") };
            let bytes = hex::decode(padded)
                .map_err(|_| SeederError::InvalidEncoding("non-hex character in token id"))?;
            return Self::from_be_slice(&bytes);
        }
        if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
            return Err(SeederError::InvalidEncoding("token id is not a decimal integer"));
        }
        U256::from_dec_str(s).map(Self).map_err(|_| SeederError::TokenIdOverflow)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
