//! Answer-record literals shaped like the application's stored responses.

use serde_json::{json, Value};

/// A multiple-choice style answer: `{"option": <label>}`.
pub fn option(label: &str) -> Value {
    json!({ "option": label })
}

/// A forcing/non-forcing style answer with an optional explanation.
pub fn forcing(is_forcing: bool, note: &str) -> Value {
    json!({ "forcing": is_forcing, "note": note })
}

/// A free-text answer: `{"text": <text>}`.
pub fn free_text(text: &str) -> Value {
    json!({ "text": text })
}
