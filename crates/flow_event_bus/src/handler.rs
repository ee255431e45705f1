//! Subscription handlers

use crate::error::HandlerError;
use compact_str::CompactString;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

type HandlerFn = dyn Fn(&[Value]) -> Result<(), HandlerError>;

/// A callable registered against an event.
///
/// Handlers receive the emitted arguments positionally. Cloning a handler is
/// cheap and the clone refers to the same callable, which is what
/// [`crate::EventBus::unsubscribe`] matches on.
#[derive(Clone)]
pub struct Handler {
    name: CompactString,
    func: Rc<HandlerFn>,
}

impl Handler {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<(), HandlerError> + 'static,
    {
        Self::named("anonymous", func)
    }

    /// Create a handler with a name used in log output
    pub fn named<F>(name: &str, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<(), HandlerError> + 'static,
    {
        Self {
            name: CompactString::new(name),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether both handlers refer to the same callable
    pub fn same(&self, other: &Handler) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }

    pub fn call(&self, args: &[Value]) -> Result<(), HandlerError> {
        (self.func)(args)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_follows_clones() {
        let handler = Handler::new(|_| Ok(()));
        let twin = Handler::new(|_| Ok(()));

        assert!(handler.same(&handler.clone()));
        assert!(!handler.same(&twin));
    }

    #[test]
    fn test_call_passes_arguments() {
        let handler = Handler::named("len", |args| {
            if args.len() == 2 {
                Ok(())
            } else {
                Err(HandlerError::new("expected two arguments"))
            }
        });

        assert_eq!(handler.name(), "len");
        assert!(handler.call(&[Value::Null, Value::Bool(true)]).is_ok());
        assert_eq!(
            handler.call(&[]).unwrap_err().message(),
            "expected two arguments"
        );
    }
}
