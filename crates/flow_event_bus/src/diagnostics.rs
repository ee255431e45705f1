//! Payloads of the reserved `flow.error` and `flow.warn` events

use crate::error::HandlerError;
use crate::event::{EventId, FLOW_ERROR, FLOW_WARN};
use serde_json::Value;

/// Message emitted on `flow.warn` when the subscription limit is disabled
pub const UNLIMITED_WARNING: &str = "Setting subscription limit to -1, memory leaks may pop up.";

/// Decoded `flow.error` payload
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// The error returned by the failing handler
    pub error: HandlerError,
    /// The event whose handler failed
    pub event: EventId,
    /// The arguments that event was emitted with
    pub args: Vec<Value>,
}

impl ErrorReport {
    /// Decode the arguments a `flow.error` handler was called with
    pub fn from_args(args: &[Value]) -> Result<Self, HandlerError> {
        match args {
            [error, event, Value::Array(original)] => Ok(Self {
                error: serde_json::from_value(error.clone())?,
                event: serde_json::from_value(event.clone())?,
                args: original.clone(),
            }),
            _ => Err(HandlerError::new(format!(
                "{FLOW_ERROR} expects [error, event, args], got {} arguments",
                args.len()
            ))),
        }
    }
}

/// Build the `flow.error` arguments for a handler failure
pub(crate) fn error_payload(error: &HandlerError, event: &EventId, args: &[Value]) -> Vec<Value> {
    let error = serde_json::to_value(error).unwrap_or_else(|_| Value::String(error.to_string()));
    let event = serde_json::to_value(event).unwrap_or_else(|_| Value::String(event.to_string()));
    vec![
        error,
        event,
        Value::Array(args.to_vec()),
    ]
}

/// Build the `flow.warn` arguments
pub(crate) fn warning_payload(message: &str) -> Vec<Value> {
    vec![Value::String(message.to_string())]
}

/// Decode the arguments a `flow.warn` handler was called with
pub fn warning_message(args: &[Value]) -> Result<&str, HandlerError> {
    match args {
        [Value::String(message)] => Ok(message),
        _ => Err(HandlerError::new(format!("{FLOW_WARN} expects [message]"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_payload_decodes() {
        let error = HandlerError::new("boom").with_details(json!({ "code": 7 }));
        let payload = error_payload(&error, &EventId::from("job.done"), &[json!(1), json!("x")]);

        let report = ErrorReport::from_args(&payload).unwrap();
        assert_eq!(report.error, error);
        assert_eq!(report.event, EventId::from("job.done"));
        assert_eq!(report.args, vec![json!(1), json!("x")]);
    }

    #[test]
    fn test_error_payload_keeps_symbol_origin() {
        let error = HandlerError::new("boom");
        let tick = EventId::symbol("tick");

        let report = ErrorReport::from_args(&error_payload(&error, &tick, &[])).unwrap();
        assert_eq!(report.event, tick);

        let named = error_payload(&error, &EventId::from("Symbol(tick)"), &[]);
        assert_ne!(ErrorReport::from_args(&named).unwrap().event, tick);
    }

    #[test]
    fn test_error_report_rejects_other_shapes() {
        assert!(ErrorReport::from_args(&[]).is_err());
        assert!(ErrorReport::from_args(&[json!("boom"), json!("e"), json!([])]).is_err());
    }

    #[test]
    fn test_warning_message() {
        let payload = warning_payload(UNLIMITED_WARNING);
        assert_eq!(warning_message(&payload).unwrap(), UNLIMITED_WARNING);
        assert!(warning_message(&[json!(1)]).is_err());
    }
}
