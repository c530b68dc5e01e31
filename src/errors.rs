use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeederError {
    #[error("invalid input length: expected {expected} got {got}")]
    InvalidInputLength { expected: usize, got: usize },

    /// `category` is `None` when the selection was not made for a named category.
    #[error("{}", zero_cardinality_message(.category.as_deref()))]
    ZeroCardinality { category: Option<String> },

    #[error("bit window out of range: offset {offset} width {width} (digest is 256 bits)")]
    WindowOutOfRange { offset: u32, width: u32 },

    #[error("token id does not fit in 256 bits")]
    TokenIdOverflow,

    #[error("invalid encoding: {0}")]
    InvalidEncoding(&'static str),

    #[error("catalog declares no categories")]
    EmptyCatalog,

    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),

    #[error("bit windows of {first:?} and {second:?} overlap")]
    OverlappingWindows { first: String, second: String },

    #[error("catalog decode error: {0}")]
    CatalogDecode(String),

    #[error("seed shape mismatch: expected {expected} indices got {got}")]
    SeedShapeMismatch { expected: usize, got: usize },

    #[error("part index out of range: {category} index {index} not in [0, {len})")]
    PartIndexOutOfRange { category: &'static str, index: u64, len: usize },
}

fn zero_cardinality_message(category: Option<&str>) -> String {
    category.map_or_else(
        || "zero cardinality".to_owned(),
        |name| format!("category {name:?} has zero cardinality"),
    )
}
