//! Statistics tracking for the event bus
use serde::{Deserialize, Serialize};

/// Counters updated by [`super::EventBus::emit`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusStats {
    /// Emissions that reached at least one handler
    pub events_emitted: u64,
    /// Handler invocations, successful or not
    pub handlers_invoked: u64,
    /// Handler invocations that returned an error
    pub handler_failures: u64,
    /// Failures delivered to `flow.error` instead of the emitter
    pub failures_rerouted: u64,
}
