//! Conventional event-emitter surface

use crate::bus::EventBus;
use crate::error::{HandlerError, SubscriptionLimitReached};
use crate::event::EventId;
use crate::handler::Handler;
use serde_json::Value;

/// The minimal surface shared by event-emitter style types.
///
/// Lets code written against `emit` / `add_listener` / `remove_listener`
/// accept an [`EventBus`] or any other emitter.
pub trait EventEmitterLike {
    /// Emit `event`, returning whether any listener ran
    fn emit(&self, event: EventId, args: &[Value]) -> Result<bool, HandlerError>;

    fn add_listener(&self, event: EventId, listener: Handler)
        -> Result<&Self, SubscriptionLimitReached>;

    fn remove_listener(&self, event: EventId, listener: &Handler) -> &Self;
}

impl EventEmitterLike for EventBus {
    fn emit(&self, event: EventId, args: &[Value]) -> Result<bool, HandlerError> {
        EventBus::emit(self, event, args)
    }

    fn add_listener(
        &self,
        event: EventId,
        listener: Handler,
    ) -> Result<&Self, SubscriptionLimitReached> {
        EventBus::subscribe(self, event, listener)
    }

    fn remove_listener(&self, event: EventId, listener: &Handler) -> &Self {
        EventBus::remove_listener(self, event, listener)
    }
}
