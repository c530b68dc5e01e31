use serde::{Deserialize, Serialize};
use crate::{
    catalog::{TraitCatalog, TraitCategory, REFERENCE_CATEGORIES},
    errors::SeederError,
    hashers::digest,
    selector::select_index,
    types::{BlockHash, Digest, TokenId},
};

/// Where a seed's indices came from. Only `BlockHash` seeds agree with the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedOrigin {
    BlockHash,
    Random,
}

/// One selected index per catalog category, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed {
    catalog_version: u32,
    origin: SeedOrigin,
    indices: Vec<u64>,
}

impl Seed {
    pub(crate) const fn new(catalog_version: u32, origin: SeedOrigin, indices: Vec<u64>) -> Self {
        Self { catalog_version, origin, indices }
    }

    #[must_use]
    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    #[must_use]
    pub const fn catalog_version(&self) -> u32 {
        self.catalog_version
    }

    #[must_use]
    pub const fn origin(&self) -> SeedOrigin {
        self.origin
    }

    #[must_use]
    pub const fn is_chain_derived(&self) -> bool {
        matches!(self.origin, SeedOrigin::BlockHash)
    }

    /// Index selected for `name`; `None` if the category is unknown or `catalog` is a
    /// different version from the one this seed was drawn under.
    #[must_use]
    pub fn get(&self, catalog: &TraitCatalog, name: &str) -> Option<u64> {
        if catalog.version() != self.catalog_version {
            return None;
        }
        catalog.position(name).and_then(|i| self.indices.get(i).copied())
    }
}

fn select_categories(d: &Digest, categories: &[TraitCategory]) -> Result<Vec<u64>, SeederError> {
    categories
        .iter()
        .map(|cat| {
            cat.validate()?;
            let index = select_index(d, cat.cardinality, cat.offset, cat.width)?;
            tracing::trace!(category = %cat.name, index, "trait selected");
            Ok(index)
        })
        .collect()
}

/// Ordered indices for an ad-hoc category list. Each category is checked on its own;
/// the first failure aborts the derivation.
///
/// # Errors
///
/// `ZeroCardinality` or `WindowOutOfRange` for the first offending category.
pub fn derive_seed_with(
    block_hash: &BlockHash,
    token_id: &TokenId,
    categories: &[TraitCategory],
) -> Result<Vec<u64>, SeederError> {
    select_categories(&digest(block_hash, token_id), categories)
}

/// Derive the seed the contract assigns to `token_id` given `block_hash`.
///
/// # Errors
///
/// A constructed catalog is already valid, so this only fails if a category slipped past
/// validation; the error is returned rather than a default index.
pub fn derive_seed(block_hash: &BlockHash, token_id: &TokenId, catalog: &TraitCatalog) -> Result<Seed, SeederError> {
    let d = digest(block_hash, token_id);
    let indices = select_categories(&d, catalog.categories())?;
    tracing::debug!(
        token_id = %token_id,
        block_hash = %block_hash,
        digest = %d,
        catalog_version = catalog.version(),
        "seed derived"
    );
    Ok(Seed::new(catalog.version(), SeedOrigin::BlockHash, indices))
}

/// Derive seeds for several tokens against one block hash. Fails on the first error.
///
/// # Errors
///
/// See [`derive_seed`].
pub fn derive_seeds_batch(
    block_hash: &BlockHash,
    token_ids: &[TokenId],
    catalog: &TraitCatalog,
) -> Result<Vec<Seed>, SeederError> {
    let mut seeds = Vec::with_capacity(token_ids.len());
    for id in token_ids {
        seeds.push(derive_seed(block_hash, id, catalog)?);
    }
    Ok(seeds)
}

/// Typed view of a seed drawn over the reference five-category layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NounSeed {
    pub background: u64,
    pub body: u64,
    pub accessory: u64,
    pub head: u64,
    pub glasses: u64,
}

impl TryFrom<&Seed> for NounSeed {
    type Error = SeederError;

    /// Positional: indices are read in [`REFERENCE_CATEGORIES`] order.
    fn try_from(seed: &Seed) -> Result<Self, Self::Error> {
        match *seed.indices() {
            [background, body, accessory, head, glasses] => Ok(Self { background, body, accessory, head, glasses }),
            _ => Err(SeederError::SeedShapeMismatch { expected: REFERENCE_CATEGORIES.len(), got: seed.indices().len() }),
        }
    }
}

impl From<NounSeed> for [u64; 5] {
    fn from(s: NounSeed) -> Self {
        [s.background, s.body, s.accessory, s.head, s.glasses]
    }
}

/// [`derive_seed`] followed by the typed five-category view.
///
/// # Errors
///
/// `SeedShapeMismatch` if `catalog` does not have exactly five categories, or any error of
/// [`derive_seed`].
pub fn derive_noun_seed(block_hash: &BlockHash, token_id: &TokenId, catalog: &TraitCatalog) -> Result<NounSeed, SeederError> {
    NounSeed::try_from(&derive_seed(block_hash, token_id, catalog)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::select_index_default;

    const COUNTS: [u64; 5] = [2, 30, 137, 234, 21];

    fn reference() -> TraitCatalog {
        TraitCatalog::reference(1, COUNTS).unwrap()
    }

    #[test]
    fn seed_matches_per_category_selection() {
        let bh = BlockHash([0x5a; 32]);
        let id = TokenId::from(100u64);
        let d = digest(&bh, &id);
        let seed = derive_seed(&bh, &id, &reference()).unwrap();
        let expected: Vec<u64> = COUNTS
            .iter()
            .zip([0u32, 48, 96, 144, 192])
            .map(|(&n, off)| select_index_default(&d, n, off).unwrap())
            .collect();
        assert_eq!(seed.indices(), expected.as_slice());
        assert_eq!(seed.catalog_version(), 1);
        assert!(seed.is_chain_derived());
    }

    #[test]
    fn named_lookup_checks_catalog_version() {
        let cat = reference();
        let seed = derive_seed(&BlockHash([1; 32]), &TokenId::from(1u8), &cat).unwrap();
        assert_eq!(seed.get(&cat, "head"), Some(seed.indices()[3]));
        assert_eq!(seed.get(&cat, "hat"), None);
        let v2 = TraitCatalog::reference(2, COUNTS).unwrap();
        assert_eq!(seed.get(&v2, "head"), None);
    }

    #[test]
    fn ad_hoc_list_aborts_on_zero_cardinality() {
        let cats = vec![
            TraitCategory::new("background", 2, 0, 48),
            TraitCategory::new("body", 0, 48, 48),
            TraitCategory::new("head", 5, 96, 48),
        ];
        assert_eq!(
            derive_seed_with(&BlockHash::default(), &TokenId::default(), &cats),
            Err(SeederError::ZeroCardinality { category: Some("body".into()) })
        );
    }

    #[test]
    fn ad_hoc_list_allows_overlapping_windows() {
        let cats = vec![TraitCategory::new("a", 1000, 0, 48), TraitCategory::new("b", 1000, 0, 48)];
        let out = derive_seed_with(&BlockHash([9; 32]), &TokenId::from(3u8), &cats).unwrap();
        assert_eq!(out[0], out[1]);
    }

    #[test]
    fn batch_is_per_token_derivation() {
        let cat = reference();
        let bh = BlockHash([2; 32]);
        let ids: Vec<TokenId> = (0u64..4).map(TokenId::from).collect();
        let batch = derive_seeds_batch(&bh, &ids, &cat).unwrap();
        for (id, seed) in ids.iter().zip(&batch) {
            assert_eq!(seed, &derive_seed(&bh, id, &cat).unwrap());
        }
    }

    #[test]
    fn noun_seed_requires_five_indices() {
        let three = TraitCatalog::new(1, "small", vec![
            TraitCategory::new("a", 2, 0, 48),
            TraitCategory::new("b", 2, 48, 48),
            TraitCategory::new("c", 2, 96, 48),
        ])
        .unwrap();
        assert_eq!(
            derive_noun_seed(&BlockHash::default(), &TokenId::default(), &three),
            Err(SeederError::SeedShapeMismatch { expected: 5, got: 3 })
        );

        let seed = derive_seed(&BlockHash([4; 32]), &TokenId::from(8u8), &reference()).unwrap();
        let noun = NounSeed::try_from(&seed).unwrap();
        assert_eq!(<[u64; 5]>::from(noun).as_slice(), seed.indices());
    }

    #[test]
    fn seed_serializes_with_origin_and_version() {
        let seed = derive_seed(&BlockHash([4; 32]), &TokenId::from(8u8), &reference()).unwrap();
        let json = serde_json::to_string(&seed).unwrap();
        assert!(json.contains("\"origin\":\"block_hash\""));
        assert!(json.contains("\"catalog_version\":1"));
        let back: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }
}
