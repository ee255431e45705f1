//! Subscription registry methods
use super::EventBus;
use crate::config::SubscriptionLimit;
use crate::diagnostics::{warning_payload, UNLIMITED_WARNING};
use crate::error::{HandlerError, SubscriptionLimitReached};
use crate::event::{EventId, FLOW_WARN};
use crate::handler::Handler;
use flow_utils::SequenceExt;
use tracing::{debug, warn};

impl EventBus {
    /// Registers `handler` for `event`, after any handlers already there.
    ///
    /// Fails without touching the registry when the bus has a bounded limit
    /// and the handler count after appending would reach it. Returns the bus
    /// so registrations can be chained.
    pub fn subscribe(
        &self,
        event: impl Into<EventId>,
        handler: Handler,
    ) -> Result<&Self, SubscriptionLimitReached> {
        let event = event.into();
        let mut subscriptions = self.subscriptions.borrow_mut();
        let count = subscriptions.get(&event).map_or(0, |handlers| handlers.len());

        if let SubscriptionLimit::Bounded(limit) = self.subscription_limit.get() {
            if count + 1 >= limit {
                warn!("⚠️ Subscription limit {} reached for {}", limit, event);
                return Err(SubscriptionLimitReached::new(event, limit));
            }
        }

        debug!("📝 Registered handler {} for {}", handler.name(), event);
        subscriptions.entry(event).or_default().push(handler);
        Ok(self)
    }

    /// Removes the first registration of `handler` for `event`.
    ///
    /// Returns `false` if the event has no handlers, otherwise whether a
    /// registration of `handler` was found. The event is dropped from the
    /// registry once its last handler is gone.
    pub fn unsubscribe(&self, event: impl Into<EventId>, handler: &Handler) -> bool {
        let event = event.into();
        let mut subscriptions = self.subscriptions.borrow_mut();
        let Some(handlers) = subscriptions.get_mut(&event) else {
            return false;
        };

        let removed = handlers
            .remove_first_by(|registered| registered.same(handler))
            .is_some();
        if handlers.is_empty_seq() {
            subscriptions.shift_remove(&event);
        }

        if removed {
            debug!("🗑️ Removed handler {} from {}", handler.name(), event);
        }
        removed
    }

    /// Alias of [`EventBus::subscribe`]
    pub fn add_listener(
        &self,
        event: impl Into<EventId>,
        listener: Handler,
    ) -> Result<&Self, SubscriptionLimitReached> {
        self.subscribe(event, listener)
    }

    /// Alias of [`EventBus::unsubscribe`] that returns the bus instead of
    /// whether anything was removed
    pub fn remove_listener(&self, event: impl Into<EventId>, listener: &Handler) -> &Self {
        self.unsubscribe(event, listener);
        self
    }

    /// The handlers registered for `event`, in dispatch order.
    ///
    /// Empty for events nobody subscribed to.
    pub fn subscriptions(&self, event: impl Into<EventId>) -> Vec<Handler> {
        self.subscriptions
            .borrow()
            .get(&event.into())
            .map(|handlers| handlers.to_vec())
            .unwrap_or_default()
    }

    pub fn subscription_count(&self, event: impl Into<EventId>) -> usize {
        self.subscriptions
            .borrow()
            .get(&event.into())
            .map_or(0, |handlers| handlers.len())
    }

    /// Events with at least one handler, in first-registration order
    pub fn events(&self) -> Vec<EventId> {
        self.subscriptions.borrow().keys().cloned().collect()
    }

    pub fn subscription_limit(&self) -> SubscriptionLimit {
        self.subscription_limit.get()
    }

    /// Changes the limit shared by every event on this bus.
    ///
    /// Setting [`SubscriptionLimit::Unlimited`] first emits `flow.warn`. If a
    /// `flow.warn` handler fails, the error is returned and the limit is left
    /// unchanged.
    pub fn set_subscription_limit(
        &self,
        limit: impl Into<SubscriptionLimit>,
    ) -> Result<(), HandlerError> {
        let limit = limit.into();
        if limit.is_unlimited() {
            warn!("⚠️ {}", UNLIMITED_WARNING);
            self.emit(FLOW_WARN, &warning_payload(UNLIMITED_WARNING))?;
        }

        self.subscription_limit.set(limit);
        Ok(())
    }
}
