//! Event identifiers and the reserved diagnostic events

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Emitted by the bus when a handler fails and at least one handler is
/// subscribed to it. Payload: `[error, origin event, original args]`.
pub const FLOW_ERROR: &str = "flow.error";

/// Emitted by the bus for internal warnings. Payload: `[message]`.
pub const FLOW_WARN: &str = "flow.warn";

/// Identifies a channel of related events.
///
/// Named ids compare by name. Symbol ids are unique tokens: two symbols are
/// only equal if one is a clone of the other, whatever their descriptions.
///
/// Serialized, a name is a plain string and a symbol is
/// `{ "symbol": "<uuid>", "description": "..." }`, so an id survives a trip
/// through a JSON payload with its identity intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    /// Plain string identifier, e.g. `"user.created"`
    Name(CompactString),
    /// Opaque unique token with a description used for display only
    Symbol {
        #[serde(rename = "symbol")]
        id: Uuid,
        description: CompactString,
    },
}

impl EventId {
    pub fn name(name: &str) -> Self {
        Self::Name(CompactString::new(name))
    }

    /// Create a new unique symbol id
    pub fn symbol(description: &str) -> Self {
        Self::Symbol {
            id: Uuid::new_v4(),
            description: CompactString::new(description),
        }
    }

    /// The name of a named id, `None` for symbols
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            Self::Symbol { .. } => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol { .. })
    }

    /// Whether this is one of the bus's own diagnostic events
    pub fn is_diagnostic(&self) -> bool {
        matches!(self.as_name(), Some(FLOW_ERROR | FLOW_WARN))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Symbol { description, .. } => write!(f, "Symbol({description})"),
        }
    }
}

impl From<&str> for EventId {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl From<String> for EventId {
    fn from(name: String) -> Self {
        Self::Name(CompactString::from(name))
    }
}

impl From<CompactString> for EventId {
    fn from(name: CompactString) -> Self {
        Self::Name(name)
    }
}

impl From<&EventId> for EventId {
    fn from(id: &EventId) -> Self {
        id.clone()
    }
}
