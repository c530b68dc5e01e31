#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

//! Nouns seeder, reproduced off-chain.
//!
//! Given a block hash and a token id this crate computes, bit for bit, the trait indices the
//! on-chain seeder contract assigns to the token. Renderers and metadata services rely on the
//! two computations agreeing forever, so every step uses the contract's exact arithmetic.

// Derivation (byte-precise, must match the contract)
//
// - Hash: Keccak-256 (EVM variant, 32-byte output)
// - Preimage: abi.encodePacked(bytes32 blockHash, uint256 tokenId), 64 bytes
// - Selection: uint48(digest >> offset) % count, computed in U256
// - Reference layout: background/body/accessory/head/glasses at 0/48/96/144/192
//
// Catalogs are versioned configuration. Preview seeds from an RNG live in `random`
// and are tagged so they cannot be mistaken for chain-derived ones.

// Core modules
pub mod types;
pub mod errors;
pub mod hashers;
pub mod selector;
pub mod catalog;
pub mod seed;
pub mod random;
pub mod parts;

// Re-export commonly used types and functions
pub use types::*;
pub use errors::SeederError;
pub use hashers::{digest, digest_from_slice, encode_packed, keccak256};
pub use selector::{select_index, select_index_default, shift_right_and_cast, BitWindow};
pub use catalog::{CatalogDocument, TraitCatalog, TraitCategory, REFERENCE_CATEGORIES};
pub use seed::{derive_noun_seed, derive_seed, derive_seed_with, derive_seeds_batch, NounSeed, Seed, SeedOrigin};
pub use random::{random_noun_seed, random_seed, random_seed_os};
pub use parts::{EncodedPart, ImageData, Images, NounData};

pub use primitive_types::U256;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
