//! User-friendly error message extraction
//!
//! Servers report failures in many shapes: plain text, JSON text, objects
//! with `message` or `error`, validation lists under `errors`, and JSON
//! documents that were stringified twice into a `message` field. The
//! functions here reduce any of them to one line of text for display. They
//! never fail.

use portal_http::ClientError;
use serde_json::{Map, Value as JsonValue};

/// Shown when the login request never reached the server
pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

/// Text produced for an absent error value
pub const UNDEFINED: &str = "undefined";

/// Text produced when a whole object is coerced to a string
pub const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// Shape of a working object, in the order shapes are tried
#[derive(Debug, PartialEq)]
enum ErrorShape<'a> {
    /// Non-empty `errors` list; holds its first record
    Validation(&'a JsonValue),
    /// Non-empty string `message`
    Message(&'a str),
    /// Non-empty string `error`
    Error(&'a str),
    Unknown,
}

/// Parse text as a JSON document
pub fn try_parse_json(text: &str) -> Result<JsonValue, serde_json::Error> {
    serde_json::from_str(text)
}

/// Extract a human-readable message from an arbitrary error value
pub fn extract_message(error: &JsonValue) -> String {
    let parsed;
    let working = match error {
        JsonValue::String(text) => match try_parse_json(text) {
            Ok(value) => {
                parsed = value;
                &parsed
            }
            Err(_) => return text.clone(),
        },
        JsonValue::Object(fields) => match non_empty_str(fields, "message") {
            // Double-encoded payloads carry a JSON document inside `message`
            Some(message) => match try_parse_json(message) {
                Ok(value) => {
                    parsed = value;
                    &parsed
                }
                Err(_) => return message.to_owned(),
            },
            None => error,
        },
        _ => error,
    };

    match classify(working) {
        ErrorShape::Validation(first) => {
            describe_violation(first).unwrap_or_else(|| coerce_to_string(error))
        }
        ErrorShape::Message(text) | ErrorShape::Error(text) => text.to_owned(),
        ErrorShape::Unknown => coerce_to_string(error),
    }
}

/// Like [`extract_message`], with `None` standing for an absent value
pub fn extract_optional_message(error: Option<&JsonValue>) -> String {
    error.map_or_else(|| UNDEFINED.to_string(), extract_message)
}

/// Message to show for a failed API call
pub fn client_error_message(error: &ClientError) -> String {
    if let Some(body) = error.server_message() {
        return extract_message(&JsonValue::String(body.to_owned()));
    }

    if error.is_transport() {
        tracing::warn!(%error, "request did not reach the server");
        return NETWORK_ERROR_MESSAGE.to_string();
    }

    tracing::warn!(%error, "request failed without a server message");
    extract_message(&JsonValue::String(error.to_string()))
}

fn classify(working: &JsonValue) -> ErrorShape<'_> {
    let JsonValue::Object(fields) = working else {
        return ErrorShape::Unknown;
    };

    if let Some(JsonValue::Array(errors)) = fields.get("errors")
        && let Some(first) = errors.first()
    {
        return ErrorShape::Validation(first);
    }

    if let Some(message) = non_empty_str(fields, "message") {
        return ErrorShape::Message(message);
    }

    if let Some(error) = non_empty_str(fields, "error") {
        return ErrorShape::Error(error);
    }

    ErrorShape::Unknown
}

/// Text for the first validation record, `None` when the record is null
fn describe_violation(record: &JsonValue) -> Option<String> {
    match record {
        JsonValue::Null => None,
        JsonValue::Object(fields) => {
            let message = non_empty_str(fields, "message");
            match (non_empty_str(fields, "field"), message) {
                (Some(field), Some(message)) => Some(format!("{field}: {message}")),
                (None, Some(message)) => Some(message.to_owned()),
                _ => Some(coerce_to_string(record)),
            }
        }
        other => Some(coerce_to_string(other)),
    }
}

fn non_empty_str<'a>(fields: &'a Map<String, JsonValue>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(JsonValue::as_str)
        .filter(|value| !value.is_empty())
}

/// String form of a value as the browser would print it
pub fn coerce_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(flag) => flag.to_string(),
        JsonValue::Number(number) => format_number(number),
        JsonValue::String(text) => text.clone(),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        JsonValue::Object(_) => OBJECT_PLACEHOLDER.to_string(),
    }
}

/// Integral floats print as plain digits below 1e21, like the browser does
fn format_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            if float == 0.0 {
                // Drops the sign of -0
                "0".to_string()
            } else {
                format!("{float:.0}")
            }
        }
        Some(_) if number.is_f64() => {
            // Positive exponents carry an explicit sign: 1e+21
            let text = number.to_string();
            match text.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    format!("{mantissa}e+{exponent}")
                }
                _ => text,
            }
        }
        _ => number.to_string(),
    }
}
