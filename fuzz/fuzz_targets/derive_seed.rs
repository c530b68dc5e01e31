#![no_main]

use libfuzzer_sys::fuzz_target;
use nouns_seeder::{derive_seed_with, BlockHash, SeederError, TokenId, TraitCategory};

fuzz_target!(|data: &[u8]| {
    // block hash (32) || token id (32) || N * (cardinality u64 || offset u32 || width u32)
    if data.len() < 64 { return; }
    let Ok(block_hash) = BlockHash::try_from(&data[..32]) else { return };
    let Ok(token_id) = TokenId::from_be_slice(&data[32..64]) else { return };

    let categories: Vec<TraitCategory> = data[64..]
        .chunks_exact(16)
        .enumerate()
        .map(|(i, c)| {
            let cardinality = u64::from_le_bytes(c[..8].try_into().unwrap_or([0u8; 8]));
            let offset = u32::from_le_bytes(c[8..12].try_into().unwrap_or([0u8; 4]));
            let width = u32::from_le_bytes(c[12..].try_into().unwrap_or([0u8; 4]));
            TraitCategory::new(format!("c{i}"), cardinality, offset, width)
        })
        .collect();

    match derive_seed_with(&block_hash, &token_id, &categories) {
        Ok(indices) => {
            assert_eq!(indices.len(), categories.len());
            for (idx, cat) in indices.iter().zip(&categories) {
                assert!(*idx < cat.cardinality);
            }
        }
        Err(SeederError::ZeroCardinality { .. } | SeederError::WindowOutOfRange { .. }) => {}
        Err(e) => panic!("unexpected error kind: {e}"),
    }
});
