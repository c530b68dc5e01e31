//! Versioned trait catalog.
//!
//! A catalog fixes, for one token-generation epoch, the ordered categories a seed is drawn
//! over: each category's option count and the digest bits it reads. Seeds derived under one
//! catalog version are only reproducible with that same catalog, so a change in any
//! cardinality or window requires a new `version`.

use serde::{Deserialize, Serialize};
use crate::{errors::SeederError, selector::BitWindow, types::{DEFAULT_FIELD_WIDTH, DIGEST_BITS}};

/// Category names of the reference layout, in selection order.
pub const REFERENCE_CATEGORIES: [&str; 5] = ["background", "body", "accessory", "head", "glasses"];

/// One visual dimension: option count plus the digest window it is selected from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitCategory {
    pub name: String,
    pub cardinality: u64,
    pub offset: u32,
    #[serde(default = "default_width")]
    pub width: u32,
}

const fn default_width() -> u32 {
    DEFAULT_FIELD_WIDTH
}

impl TraitCategory {
    #[must_use]
    pub fn new(name: impl Into<String>, cardinality: u64, offset: u32, width: u32) -> Self {
        Self { name: name.into(), cardinality, offset, width }
    }

    #[must_use]
    pub const fn window(&self) -> BitWindow {
        BitWindow { offset: self.offset, width: self.width }
    }

    /// # Errors
    ///
    /// `ZeroCardinality` or `WindowOutOfRange`.
    pub fn validate(&self) -> Result<(), SeederError> {
        if self.cardinality == 0 {
            return Err(SeederError::ZeroCardinality { category: Some(self.name.clone()) });
        }
        self.window().validate()
    }
}

/// On-disk shape of a catalog; validated into a [`TraitCatalog`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    pub categories: Vec<TraitCategory>,
}

/// Validated, immutable catalog. Windows are in range and pairwise disjoint, names unique,
/// and every category has at least one option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct TraitCatalog {
    version: u32,
    name: String,
    categories: Vec<TraitCategory>,
}

impl TraitCatalog {
    /// # Errors
    ///
    /// `EmptyCatalog`, `ZeroCardinality`, `WindowOutOfRange`, `DuplicateCategory` or
    /// `OverlappingWindows`.
    pub fn new(version: u32, name: impl Into<String>, categories: Vec<TraitCategory>) -> Result<Self, SeederError> {
        if categories.is_empty() {
            return Err(SeederError::EmptyCatalog);
        }
        for (i, cat) in categories.iter().enumerate() {
            cat.validate()?;
            for prev in &categories[..i] {
                if prev.name == cat.name {
                    return Err(SeederError::DuplicateCategory(cat.name.clone()));
                }
                if prev.window().overlaps(&cat.window()) {
                    return Err(SeederError::OverlappingWindows {
                        first: prev.name.clone(),
                        second: cat.name.clone(),
                    });
                }
            }
        }
        let catalog = Self { version, name: name.into(), categories };
        tracing::debug!(
            version = catalog.version,
            name = %catalog.name,
            categories = catalog.categories.len(),
            "trait catalog validated"
        );
        Ok(catalog)
    }

    /// Reference five-category layout: background, body, accessory, head, glasses at
    /// offsets 0/48/96/144/192, 48 bits each.
    ///
    /// # Errors
    ///
    /// `ZeroCardinality` if any count is zero.
    pub fn reference(version: u32, counts: [u64; 5]) -> Result<Self, SeederError> {
        let categories = REFERENCE_CATEGORIES
            .iter()
            .zip(counts)
            .zip((0u32..).step_by(DEFAULT_FIELD_WIDTH as usize))
            .map(|((name, count), offset)| TraitCategory::new(*name, count, offset, DEFAULT_FIELD_WIDTH))
            .collect();
        Self::new(version, "nouns", categories)
    }

    /// Load and validate a JSON catalog document.
    ///
    /// # Errors
    ///
    /// `CatalogDecode` for malformed JSON; otherwise any error of [`TraitCatalog::new`].
    pub fn from_json(s: &str) -> Result<Self, SeederError> {
        let doc: CatalogDocument = serde_json::from_str(s).map_err(|e| SeederError::CatalogDecode(e.to_string()))?;
        Self::try_from(doc)
    }

    /// # Errors
    ///
    /// `CatalogDecode` if serialisation fails.
    pub fn to_json(&self) -> Result<String, SeederError> {
        serde_json::to_string_pretty(&CatalogDocument::from(self.clone()))
            .map_err(|e| SeederError::CatalogDecode(e.to_string()))
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn categories(&self) -> &[TraitCategory] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&TraitCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// True when no two windows share a bit. Always holds for a constructed catalog.
    #[must_use]
    pub fn windows_disjoint(&self) -> bool {
        self.categories.iter().enumerate().all(|(i, a)| {
            self.categories[i + 1..].iter().all(|b| !a.window().overlaps(&b.window()))
        })
    }

    /// Bitmap of digest bits read by some category, as `[bool; 256]` indexed by bit.
    #[must_use]
    pub fn covered_bits(&self) -> [bool; DIGEST_BITS as usize] {
        let mut bits = [false; DIGEST_BITS as usize];
        for cat in &self.categories {
            for b in cat.offset..cat.window().end() {
                bits[b as usize] = true;
            }
        }
        bits
    }
}

impl TryFrom<CatalogDocument> for TraitCatalog {
    type Error = SeederError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(doc.version, doc.name, doc.categories)
    }
}

impl From<TraitCatalog> for CatalogDocument {
    fn from(c: TraitCatalog) -> Self {
        Self { version: c.version, name: c.name, categories: c.categories }
    }
}
