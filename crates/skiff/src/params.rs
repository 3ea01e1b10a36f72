//! Per-call parameter values.

use bytes::Bytes;
use std::collections::HashMap;

/// A single parameter value.
///
/// Values are carried as supplied; no range or enum checking happens
/// locally. Malformed values travel to the daemon and come back as
/// remote errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value.
    Str(String),
    /// Boolean, rendered as `true`/`false` on the wire.
    Bool(bool),
    /// Integer, rendered in decimal on the wire.
    Int(i64),
    /// Structured value; serialized as JSON (query filters, request bodies).
    Json(serde_json::Value),
    /// Raw payload (tar archives, image bundles); only meaningful for
    /// body parameters.
    Bytes(Bytes),
}

impl ParamValue {
    /// Renders the value for a path, query, or header position.
    ///
    /// Raw payloads have no textual form; they are passed through
    /// lossily, which only a misdeclared call would ever hit.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Json(v) => v.to_string(),
            Self::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl From<Bytes> for ParamValue {
    fn from(b: Bytes) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<u8>> for ParamValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(b))
    }
}

/// Flat mapping of parameter name to value for one call.
///
/// Keys are the wire names an endpoint declares (`all`, `ps_args`,
/// `X-Registry-Auth`, `body`, ...). Built per call and discarded after.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: HashMap<&'static str, ParamValue>,
    extra_query: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a declared parameter, replacing any previous value.
    #[must_use]
    pub fn set(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    /// Adds a free-form query parameter outside the endpoint's declared
    /// set.
    ///
    /// The bag is merged into the resolved query *last*: on a key
    /// collision with a declared parameter, the bag entry wins.
    #[must_use]
    pub fn extra_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_query.push((name.into(), value.into()));
        self
    }

    /// Looks up a declared parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub(crate) fn extra_query_pairs(&self) -> &[(String, String)] {
        &self.extra_query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_replaces_previous_value() {
        let params = Params::new().set("tail", "all").set("tail", "50");
        assert_eq!(params.get("tail"), Some(&ParamValue::Str("50".to_string())));
    }

    #[test]
    fn render_scalar_values() {
        assert_eq!(ParamValue::from(true).render(), "true");
        assert_eq!(ParamValue::from(42i64).render(), "42");
        assert_eq!(ParamValue::from("abc").render(), "abc");
    }

    #[test]
    fn render_json_value() {
        let v = ParamValue::from(json!({"status": ["paused"]}));
        assert_eq!(v.render(), r#"{"status":["paused"]}"#);
    }

    #[test]
    fn extra_query_accumulates_in_order() {
        let params = Params::new()
            .extra_query("a", "1")
            .extra_query("b", "2");
        assert_eq!(
            params.extra_query_pairs(),
            &[("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
        );
    }
}
