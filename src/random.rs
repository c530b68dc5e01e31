//! Non-reproducible preview seeds.
//!
//! These draw each index uniformly from an RNG instead of a block hash. They share the
//! [`Seed`] shape with chain-derived seeds but carry `SeedOrigin::Random`, and must never be
//! stored where agreement with the contract matters.

use rand::Rng;
use rand_core::{OsRng, RngCore};
use crate::{
    catalog::TraitCatalog,
    errors::SeederError,
    seed::{NounSeed, Seed, SeedOrigin},
};

/// Draw one index per category, each uniform over `[0, cardinality)`.
///
/// Catalog construction rejects zero cardinalities, so every category has a valid range.
#[must_use]
pub fn random_seed<R: RngCore>(catalog: &TraitCatalog, rng: &mut R) -> Seed {
    let indices = catalog
        .categories()
        .iter()
        .map(|cat| rng.gen_range(0..cat.cardinality))
        .collect();
    tracing::debug!(catalog_version = catalog.version(), "random preview seed generated");
    Seed::new(catalog.version(), SeedOrigin::Random, indices)
}

/// [`random_seed`] backed by the operating system RNG.
#[must_use]
pub fn random_seed_os(catalog: &TraitCatalog) -> Seed {
    random_seed(catalog, &mut OsRng)
}

/// Random preview over a five-category catalog.
///
/// # Errors
///
/// `SeedShapeMismatch` unless `catalog` has exactly five categories.
pub fn random_noun_seed<R: RngCore>(catalog: &TraitCatalog, rng: &mut R) -> Result<NounSeed, SeederError> {
    NounSeed::try_from(&random_seed(catalog, rng))
}
