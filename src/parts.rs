//! Seed-to-asset lookup over bundled image data.
//!
//! The image data is the catalog's source of truth: each table's length is the
//! cardinality of its category. Rendering the parts is left to the caller.

use serde::{Deserialize, Serialize};
use crate::{catalog::TraitCatalog, errors::SeederError, seed::NounSeed};

/// One run-length encoded part image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPart {
    pub filename: String,
    pub data: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    pub bodies: Vec<EncodedPart>,
    pub accessories: Vec<EncodedPart>,
    pub heads: Vec<EncodedPart>,
    pub glasses: Vec<EncodedPart>,
}

/// `image-data.json`: background colours plus the four part tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub bgcolors: Vec<String>,
    pub images: Images,
}

/// Parts in render order (body, accessory, head, glasses) and the background colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NounData<'a> {
    pub parts: [&'a EncodedPart; 4],
    pub background: &'a str,
}

fn pick<'a, T>(table: &'a [T], category: &'static str, index: u64) -> Result<&'a T, SeederError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .ok_or(SeederError::PartIndexOutOfRange { category, index, len: table.len() })
}

impl ImageData {
    /// # Errors
    ///
    /// `CatalogDecode` for malformed JSON.
    pub fn from_json(s: &str) -> Result<Self, SeederError> {
        serde_json::from_str(s).map_err(|e| SeederError::CatalogDecode(e.to_string()))
    }

    /// Table lengths in reference category order.
    #[must_use]
    pub fn counts(&self) -> [u64; 5] {
        [
            self.bgcolors.len() as u64,
            self.images.bodies.len() as u64,
            self.images.accessories.len() as u64,
            self.images.heads.len() as u64,
            self.images.glasses.len() as u64,
        ]
    }

    /// Reference-layout catalog sized from this image data.
    ///
    /// # Errors
    ///
    /// `ZeroCardinality` if any table is empty.
    pub fn catalog(&self, version: u32) -> Result<TraitCatalog, SeederError> {
        TraitCatalog::reference(version, self.counts())
    }

    /// # Errors
    ///
    /// `PartIndexOutOfRange` if a seed index is past the end of its table, e.g. a seed drawn
    /// under a larger catalog.
    pub fn noun_data(&self, seed: &NounSeed) -> Result<NounData<'_>, SeederError> {
        Ok(NounData {
            parts: [
                pick(&self.images.bodies, "body", seed.body)?,
                pick(&self.images.accessories, "accessory", seed.accessory)?,
                pick(&self.images.heads, "head", seed.head)?,
                pick(&self.images.glasses, "glasses", seed.glasses)?,
            ],
            background: pick(&self.bgcolors, "background", seed.background)?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(name: &str) -> EncodedPart {
        EncodedPart { filename: name.into(), data: format!("0x{}", hex::encode(name)) }
    }

    fn sample() -> ImageData {
        ImageData {
            bgcolors: vec!["d5d7e1".into(), "e1d7d5".into()],
            images: Images {
                bodies: vec![part("body-a"), part("body-b"), part("body-c")],
                accessories: vec![part("acc-a")],
                heads: vec![part("head-a"), part("head-b")],
                glasses: vec![part("glasses-a"), part("glasses-b"), part("glasses-c"), part("glasses-d")],
            },
        }
    }

    #[test]
    fn catalog_cardinalities_follow_table_lengths() {
        let cat = sample().catalog(1).unwrap();
        let counts: Vec<u64> = cat.categories().iter().map(|c| c.cardinality).collect();
        assert_eq!(counts, vec![2, 3, 1, 2, 4]);
    }

    #[test]
    fn empty_table_is_a_configuration_error() {
        let mut data = sample();
        data.images.accessories.clear();
        assert_eq!(data.catalog(1), Err(SeederError::ZeroCardinality { category: Some("accessory".into()) }));
    }

    #[test]
    fn lookup_orders_parts_for_rendering() {
        let data = sample();
        let seed = NounSeed { background: 1, body: 2, accessory: 0, head: 1, glasses: 3 };
        let noun = data.noun_data(&seed).unwrap();
        let names: Vec<&str> = noun.parts.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, vec!["body-c", "acc-a", "head-b", "glasses-d"]);
        assert_eq!(noun.background, "e1d7d5");
    }

    #[test]
    fn lookup_rejects_out_of_range_index() {
        let seed = NounSeed { head: 2, ..NounSeed::default() };
        assert_eq!(
            sample().noun_data(&seed),
            Err(SeederError::PartIndexOutOfRange { category: "head", index: 2, len: 2 })
        );
    }

    #[test]
    fn parses_image_data_json() {
        let json = r#"{
            "bgcolors": ["d5d7e1"],
            "images": {
                "bodies": [{ "filename": "body-bluegrey", "data": "0x0015171f090e030e030e030e03" }],
                "accessories": [{ "filename": "accessory-1n", "data": "0x00" }],
                "heads": [{ "filename": "head-aardvark", "data": "0x00" }],
                "glasses": [{ "filename": "glasses-square-black", "data": "0x00" }]
            }
        }"#;
        let data = ImageData::from_json(json).unwrap();
        assert_eq!(data.counts(), [1, 1, 1, 1, 1]);
        assert!(matches!(ImageData::from_json("[]"), Err(SeederError::CatalogDecode(_))));
    }
}
