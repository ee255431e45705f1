//! Error types for collections

/// Errors raised while building a collection from untyped input
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CollectionError {
    /// The input is neither an object nor a non-empty array
    #[error("Collection::from_json: expected an object or array, got \"{0}\"")]
    UnsupportedInput(&'static str),

    /// An element of an entry array is not a `[key, value]` pair
    #[error("Collection::from_json: entry {0} is not a [key, value] pair")]
    InvalidEntry(usize),
}
