//! # Flow Utils
//!
//! Small helpers shared by the flow crates. Nothing in here knows about the
//! event bus; the bus consumes [`SequenceExt`] to manage its handler lists and
//! [`Type`] to describe payloads in its logs.
//!
//! - [`SequenceExt`]: emptiness check and first-match removal for ordered sequences
//! - [`is_object`] / [`merge_object`]: JSON object helpers
//! - [`Type`]: human-readable structural description of a JSON value
//! - [`load_optional`]: best-effort dynamic library loading

pub mod library;
pub mod object;
pub mod sequence;
pub mod type_name;

pub use library::load_optional;
pub use object::{is_object, merge_object};
pub use sequence::SequenceExt;
pub use type_name::{short_type_name, Type};
