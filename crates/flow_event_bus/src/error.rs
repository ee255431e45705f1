//! Error types for the flow event bus

use crate::event::EventId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Main error type for the event bus crate
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// A subscription was rejected by the subscription limit
    #[error(transparent)]
    SubscriptionLimit(#[from] SubscriptionLimitReached),

    /// A handler failed and nobody was listening for `flow.error`
    #[error("Handler execution failed: {0}")]
    Handler(#[from] HandlerError),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Registering another handler would exceed the bus's subscription limit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Reached the total number of subscriptions for event \"{event}\", limit: {limit}")]
pub struct SubscriptionLimitReached {
    event: EventId,
    limit: usize,
}

impl SubscriptionLimitReached {
    pub fn new(event: EventId, limit: usize) -> Self {
        Self { event, limit }
    }

    /// The event whose subscription was rejected
    pub fn event(&self) -> &EventId {
        &self.event
    }

    /// The limit configured on the bus at the time of the rejection
    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Failure reported by a handler.
///
/// Serializable so it can travel as the first argument of a `flow.error`
/// emission; see [`crate::ErrorReport`].
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details to the error
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid event arguments: {err}"))
    }
}

/// Errors raised while loading or validating a [`crate::BusConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A subscription limit below -1
    #[error("Invalid subscription limit {0}: expected -1 (unlimited) or a non-negative count")]
    InvalidLimit(i64),

    /// A value that parses but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
