//! The event bus: subscription registry and synchronous dispatch.
//!
//! - [`registry`]: subscribe, unsubscribe, lookups and the subscription limit
//! - [`dispatch`]: `emit` and the handler failure policy
//! - [`stats`]: counters for monitoring

mod dispatch;
mod registry;
mod stats;

pub use stats::BusStats;

use crate::config::{BusConfig, SubscriptionLimit};
use crate::event::EventId;
use crate::handler::Handler;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use tracing::warn;

/// Handler lists are short; most events have a handful of subscribers.
pub(crate) type HandlerList = SmallVec<[Handler; 4]>;

/// Routes named events to the handlers registered for them.
///
/// The bus is a single-owner, single-threaded structure. All methods take
/// `&self`, so handlers can hold an `Rc<EventBus>` (or a `Weak`) and
/// subscribe, unsubscribe or emit while a dispatch is running.
///
/// Invariants:
/// - every event key in the registry has at least one handler
/// - a subscribe never brings an event up to a bounded [`SubscriptionLimit`]
/// - handlers run in registration order; removals never reorder the rest
pub struct EventBus {
    /// Handlers by event, keys in first-registration order
    subscriptions: RefCell<IndexMap<EventId, HandlerList>>,
    subscription_limit: Cell<SubscriptionLimit>,
    stats: Cell<BusStats>,
}

impl EventBus {
    /// Creates a bus with no handlers and the default subscription limit.
    pub fn new() -> Self {
        Self::with_limit(SubscriptionLimit::default())
    }

    /// Creates a bus from configuration.
    ///
    /// An unlimited configured limit is only logged: a new bus has no
    /// `flow.warn` subscribers to tell.
    pub fn with_config(config: &BusConfig) -> Self {
        if config.subscription_limit.is_unlimited() {
            warn!("⚠️ Event bus created without a subscription limit");
        }

        Self::with_limit(config.subscription_limit)
    }

    fn with_limit(limit: SubscriptionLimit) -> Self {
        Self {
            subscriptions: RefCell::new(IndexMap::new()),
            subscription_limit: Cell::new(limit),
            stats: Cell::new(BusStats::default()),
        }
    }

    /// Current statistics
    pub fn stats(&self) -> BusStats {
        self.stats.get()
    }

    fn record<F>(&self, update: F)
    where
        F: FnOnce(&mut BusStats),
    {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("events", &self.subscriptions.borrow().len())
            .field("subscription_limit", &self.subscription_limit.get())
            .field("stats", &self.stats.get())
            .finish()
    }
}
