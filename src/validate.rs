//! Schema check for inbound log entry payloads.
//! Used by: writer.

use serde_json::Value;

use crate::entry::{NewLogEntry, Severity};
use crate::error::{Error, Result};

/// Extracts `severity` and `message`; other fields, including any
/// client-supplied `id` or `dateTime`, are ignored.
pub fn validate(payload: &Value) -> Result<NewLogEntry> {
    let fields = payload
        .as_object()
        .ok_or_else(|| Error::validation("body", "expected a JSON object"))?;

    let severity = match fields.get("severity") {
        None | Some(Value::Null) => return Err(Error::validation("severity", "field is required")),
        Some(Value::String(s)) => Severity::parse(s).ok_or_else(|| {
            Error::validation("severity", format!("expected one of info, warning, error, got {s:?}"))
        })?,
        Some(_) => {
            return Err(Error::validation("severity", "expected one of info, warning, error"));
        }
    };

    let message = match fields.get("message") {
        None | Some(Value::Null) => return Err(Error::validation("message", "field is required")),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(Error::validation("message", "expected a string")),
    };

    Ok(NewLogEntry { severity, message })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn field_of(result: Result<NewLogEntry>) -> &'static str {
        match result {
            Err(Error::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_passes() -> Result<()> {
        let entry = validate(&json!({ "severity": "error", "message": "disk full" }))?;
        assert_eq!(entry, NewLogEntry { severity: Severity::Error, message: "disk full".into() });
        Ok(())
    }

    #[test]
    fn every_severity_accepted() -> Result<()> {
        for (raw, expected) in [
            ("info", Severity::Info),
            ("warning", Severity::Warning),
            ("error", Severity::Error),
        ] {
            let entry = validate(&json!({ "severity": raw, "message": "m" }))?;
            assert_eq!(entry.severity, expected);
        }
        Ok(())
    }

    #[test]
    fn unknown_severity_rejected() {
        let result = validate(&json!({ "severity": "critical", "message": "x" }));
        assert_eq!(field_of(result), "severity");
    }

    #[test]
    fn severity_is_case_sensitive() {
        let result = validate(&json!({ "severity": "Warning", "message": "x" }));
        assert_eq!(field_of(result), "severity");
    }

    #[test]
    fn missing_severity_rejected() {
        assert_eq!(field_of(validate(&json!({ "message": "x" }))), "severity");
        assert_eq!(field_of(validate(&json!({ "severity": null, "message": "x" }))), "severity");
    }

    #[test]
    fn non_string_severity_rejected() {
        assert_eq!(field_of(validate(&json!({ "severity": 1, "message": "x" }))), "severity");
    }

    #[test]
    fn missing_message_rejected() {
        assert_eq!(field_of(validate(&json!({ "severity": "info" }))), "message");
    }

    #[test]
    fn non_string_message_rejected() {
        let result = validate(&json!({ "severity": "info", "message": 42 }));
        assert_eq!(field_of(result), "message");
        let result = validate(&json!({ "severity": "info", "message": ["a"] }));
        assert_eq!(field_of(result), "message");
    }

    #[test]
    fn empty_message_accepted() -> Result<()> {
        let entry = validate(&json!({ "severity": "info", "message": "" }))?;
        assert!(entry.message.is_empty());
        Ok(())
    }

    #[test]
    fn extra_fields_ignored() -> Result<()> {
        let entry = validate(&json!({
            "severity": "warning",
            "message": "m",
            "id": "client-id",
            "dateTime": 1,
            "host": "web-1",
        }))?;
        assert_eq!(entry, NewLogEntry { severity: Severity::Warning, message: "m".into() });
        Ok(())
    }

    #[test]
    fn non_object_payload_rejected() {
        assert_eq!(field_of(validate(&json!(["info", "m"]))), "body");
        assert_eq!(field_of(validate(&json!("info"))), "body");
    }
}
