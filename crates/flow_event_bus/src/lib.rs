//! # Flow Event Bus
//!
//! A minimal in-process publish/subscribe primitive. An [`EventBus`] routes
//! named events to the handlers registered for them, caps the number of
//! handlers per event, and keeps one failing handler from silently breaking
//! emission for the others.
//!
//! ## Key Features
//!
//! - **Synchronous dispatch**: `emit` runs every handler, in registration
//!   order, before it returns
//! - **Subscription limit**: a per-bus ceiling on handlers per event
//!   (default 10, `-1` for unlimited)
//! - **Failure routing**: handler errors go to `flow.error` subscribers when
//!   there are any, and back to the emitter when there are none
//! - **Diagnostics as events**: the bus reports on itself through
//!   `flow.error` and `flow.warn`, which are ordinary events
//!
//! ## Usage
//!
//! ```rust
//! use flow_event_bus::{ErrorReport, EventBus, Handler, HandlerError, FLOW_ERROR};
//! use serde_json::json;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let bus = EventBus::new();
//! let greeted = Rc::new(RefCell::new(Vec::new()));
//!
//! let log = greeted.clone();
//! bus.subscribe("user.joined", Handler::new(move |args| {
//!     log.borrow_mut().push(args[0].clone());
//!     Ok(())
//! }))?
//! .subscribe("user.joined", Handler::new(|_| Err(HandlerError::new("mailer offline"))))?
//! .subscribe(FLOW_ERROR, Handler::new(|args| {
//!     let report = ErrorReport::from_args(args)?;
//!     assert_eq!(report.event.as_name(), Some("user.joined"));
//!     Ok(())
//! }))?;
//!
//! assert!(bus.emit("user.joined", &[json!("ada")])?);
//! assert!(!bus.emit("user.left", &[])?);
//! assert_eq!(*greeted.borrow(), vec![json!("ada")]);
//! # Ok::<(), flow_event_bus::FlowError>(())
//! ```

pub mod bus;
pub mod config;
pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod event;
pub mod handler;

// Re-exports for convenience
pub use bus::{BusStats, EventBus};
pub use config::{BusConfig, SubscriptionLimit, DEFAULT_SUBSCRIPTION_LIMIT};
pub use diagnostics::{warning_message, ErrorReport, UNLIMITED_WARNING};
pub use emitter::EventEmitterLike;
pub use error::{ConfigError, FlowError, HandlerError, SubscriptionLimitReached};
pub use event::{EventId, FLOW_ERROR, FLOW_WARN};
pub use handler::Handler;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, FlowError>;
