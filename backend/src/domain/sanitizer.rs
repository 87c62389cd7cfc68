//! # Sanitizer
//!
//! Normalizes raw request fields before validation. Each handler declares which
//! fields it reads and how: text fields are trimmed and HTML-escaped, flag
//! fields are coerced to booleans. Undeclared fields pass through untouched and
//! absent fields stay absent so the validator can report them.

use serde_json::{Map, Value};

/// A raw request record: a JSON body object or the query string as strings
pub type Record = Map<String, Value>;

/// How a declared field is normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sanitize {
    /// Trim surrounding whitespace, then escape HTML-significant characters
    Text,
    /// Coerce to a boolean
    Flag,
}

/// One declared field and its treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSanitizer {
    pub field: &'static str,
    pub sanitize: Sanitize,
}

impl FieldSanitizer {
    pub const fn text(field: &'static str) -> Self {
        Self {
            field,
            sanitize: Sanitize::Text,
        }
    }

    pub const fn flag(field: &'static str) -> Self {
        Self {
            field,
            sanitize: Sanitize::Flag,
        }
    }
}

/// Apply the declared sanitizers to a record
pub fn sanitize(mut record: Record, fields: &[FieldSanitizer]) -> Record {
    for sanitizer in fields {
        if let Some(value) = record.get_mut(sanitizer.field) {
            let cleaned = match sanitizer.sanitize {
                Sanitize::Text => sanitize_text(value),
                Sanitize::Flag => Value::Bool(to_boolean(value)),
            };
            *value = cleaned;
        }
    }
    record
}

/// Trim and escape a text value.
///
/// Scalars are stringified first; `null` becomes the empty string. Objects and
/// arrays are returned unchanged so a string rule can reject them.
fn sanitize_text(value: &Value) -> Value {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => return value.clone(),
    };
    Value::String(escape_html(text.trim()))
}

fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !matches!(s.as_str(), "" | "0" | "false"),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Replace characters that are significant in HTML with entity references
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '/' => escaped.push_str("&#x2F;"),
            '\\' => escaped.push_str("&#x5C;"),
            '`' => escaped.push_str("&#96;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().expect("test record must be an object")
    }

    #[test]
    fn test_text_fields_are_trimmed_and_escaped() {
        let fields = [FieldSanitizer::text("agentName"), FieldSanitizer::text("country")];
        let cleaned = sanitize(
            record(json!({ "agentName": "  <b>Alex</b> ", "country": "UK\t" })),
            &fields,
        );

        assert_eq!(cleaned["agentName"], "&lt;b&gt;Alex&lt;&#x2F;b&gt;");
        assert_eq!(cleaned["country"], "UK");
    }

    #[test]
    fn test_quotes_are_neutralized() {
        assert_eq!(
            escape_html("' OR '1'='1"),
            "&#x27; OR &#x27;1&#x27;=&#x27;1"
        );
        assert_eq!(escape_html(r#"a"b\c`d&e"#), "a&quot;b&#x5C;c&#96;d&amp;e");
    }

    #[test]
    fn test_scalars_become_strings() {
        let fields = [
            FieldSanitizer::text("commission"),
            FieldSanitizer::text("active"),
            FieldSanitizer::text("phoneNo"),
        ];
        let cleaned = sanitize(
            record(json!({ "commission": 0.15, "active": true, "phoneNo": null })),
            &fields,
        );

        assert_eq!(cleaned["commission"], "0.15");
        assert_eq!(cleaned["active"], "true");
        assert_eq!(cleaned["phoneNo"], "");
    }

    #[test]
    fn test_structured_values_are_left_alone() {
        let fields = [FieldSanitizer::text("agentCode")];
        let cleaned = sanitize(record(json!({ "agentCode": ["A001"] })), &fields);

        assert_eq!(cleaned["agentCode"], json!(["A001"]));
    }

    #[test]
    fn test_absent_and_undeclared_fields() {
        let fields = [FieldSanitizer::text("agentCode")];
        let cleaned = sanitize(record(json!({ "extra": "  keep  " })), &fields);

        assert!(!cleaned.contains_key("agentCode"));
        assert_eq!(cleaned["extra"], "  keep  ");
    }

    #[test]
    fn test_flags_are_coerced_to_booleans() {
        let fields = [
            FieldSanitizer::flag("a"),
            FieldSanitizer::flag("b"),
            FieldSanitizer::flag("c"),
            FieldSanitizer::flag("d"),
            FieldSanitizer::flag("e"),
            FieldSanitizer::flag("f"),
        ];
        let cleaned = sanitize(
            record(json!({ "a": "false", "b": "0", "c": "", "d": "yes", "e": 1, "f": false })),
            &fields,
        );

        assert_eq!(cleaned["a"], false);
        assert_eq!(cleaned["b"], false);
        assert_eq!(cleaned["c"], false);
        assert_eq!(cleaned["d"], true);
        assert_eq!(cleaned["e"], true);
        assert_eq!(cleaned["f"], false);
    }
}
