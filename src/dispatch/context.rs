//! Per-request submission context.

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Named fields supplied by a caller for one notification kind, plus the
/// derived fields the orchestrator inserts before rendering. Created and
/// discarded per request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SubmissionContext {
    fields: Map<String, Value>,
}

impl SubmissionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), Value::String(value.into()));
    }

    /// Insert a string field only when a value was supplied.
    pub fn insert_opt_str(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert_str(key, value);
        }
    }

    /// Insert a numeric field; non-finite values are treated as absent.
    pub fn insert_number(&mut self, key: impl Into<String>, value: f64) {
        if let Some(number) = Number::from_f64(value) {
            self.fields.insert(key.into(), Value::Number(number));
        }
    }

    pub fn insert_opt_number(&mut self, key: impl Into<String>, value: Option<f64>) {
        if let Some(value) = value {
            self.insert_number(key, value);
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    /// A field counts as present when it exists and is neither null nor an
    /// empty string.
    pub fn is_present(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Fill absent fields with a placeholder before rendering.
    pub fn fill_missing(&mut self, keys: &[&str], placeholder: &str) {
        for key in keys {
            if !self.is_present(key) {
                self.insert_str(*key, placeholder);
            }
        }
    }
}
