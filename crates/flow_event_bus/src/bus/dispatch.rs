//! Event emission and handler failure routing
use super::EventBus;
use crate::diagnostics::error_payload;
use crate::error::HandlerError;
use crate::event::{EventId, FLOW_ERROR};
use flow_utils::{SequenceExt, Type};
use serde_json::Value;
use tracing::{debug, error};

impl EventBus {
    /// Calls every handler registered for `event` with `args`, in
    /// registration order, on the caller's thread.
    ///
    /// Returns `Ok(false)` without doing anything when `event` has no
    /// handlers and `Ok(true)` once at least one handler ran, including when
    /// some of them failed and the failures went to `flow.error`.
    ///
    /// # Handler failures
    ///
    /// If anyone is subscribed to `flow.error`, a failure is emitted there as
    /// `[error, event, args]` and the remaining handlers still run. Otherwise
    /// the error is returned immediately and the remaining handlers are
    /// skipped. Failures of `flow.error` handlers themselves are always
    /// returned, never routed back into `flow.error`.
    ///
    /// # Reentrancy
    ///
    /// The handler list is copied before the first handler runs. Handlers
    /// added or removed during the dispatch take effect from the next
    /// emission on.
    pub fn emit(&self, event: impl Into<EventId>, args: &[Value]) -> Result<bool, HandlerError> {
        let event = event.into();
        let handlers = self.subscriptions(&event);
        if handlers.is_empty_seq() {
            return Ok(false);
        }

        debug!("📤 Emitting {} to {} handlers", event, handlers.len());
        self.record(|stats| stats.events_emitted += 1);

        for handler in &handlers {
            self.record(|stats| stats.handlers_invoked += 1);
            let failure = match handler.call(args) {
                Ok(()) => continue,
                Err(failure) => failure,
            };
            self.record(|stats| stats.handler_failures += 1);

            if event.as_name() == Some(FLOW_ERROR) || self.subscription_count(FLOW_ERROR) == 0 {
                error!(
                    "❌ Handler {} failed for {} with args {}: {}",
                    handler.name(),
                    event,
                    Type::describe_all(args),
                    failure
                );
                return Err(failure);
            }

            debug!(
                "Handler {} failed for {}, routing to {}: {}",
                handler.name(),
                event,
                FLOW_ERROR,
                failure
            );
            self.record(|stats| stats.failures_rerouted += 1);
            self.emit(FLOW_ERROR, &error_payload(&failure, &event, args))?;
        }

        Ok(true)
    }
}
