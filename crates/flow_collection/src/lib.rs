//! # Flow Collection
//!
//! An insertion-ordered key/value container with convenience traversal,
//! sampling, partitioning and sorting operations. It dereferences to
//! [`indexmap::IndexMap`], so the whole map API is available as well.
//!
//! ```rust
//! use flow_collection::Collection;
//!
//! let mut scores: Collection<&str, u32> = [("ada", 3), ("bob", 1), ("cy", 2)].into_iter().collect();
//! scores.sort();
//!
//! assert_eq!(scores.first(), Some((&"bob", &1)));
//! assert_eq!(scores.to_string(), "Collection<&str, u32>");
//! ```

pub mod collection;
pub mod error;

pub use collection::Collection;
pub use error::CollectionError;

/// Result type used by fallible collection constructors
pub type Result<T> = std::result::Result<T, CollectionError>;
