//! JSON parsing for workspace chat data.
//!
//! The chat payload has no fixed schema: editor releases moved message text
//! between several locations inside a bubble. Content is resolved by walking
//! [`CONTENT_RULES`] in order and taking the first non-blank result.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{AppError, Message, Result, UNKNOWN_TIME, UNKNOWN_TYPE};

/// One chat tab as stored in the payload's `tabs` array.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTab {
    #[serde(default)]
    pub chat_title: Option<Value>,
    #[serde(default)]
    pub tab_id: Option<Value>,
    #[serde(default)]
    pub bubbles: Option<Vec<Value>>,
}

/// Resolves bubble content from one storage location.
type ContentRule = fn(&Map<String, Value>) -> Option<String>;

/// Content locations, newest schema first.
///
/// `parts` beats `text` at the same level because streamed responses keep
/// fragments in `parts` that never reach `text`.
const CONTENT_RULES: &[(&str, ContentRule)] = &[
    ("data.parts", data_parts),
    ("data.text", data_text),
    ("parts", joined_parts),
    ("text", top_level_text),
    ("message", top_level_message),
];

/// Parses the stored chat payload into its tabs.
///
/// A payload without a `tabs` array yields no tabs. Tabs that are not
/// objects or have a malformed `bubbles` field are skipped.
///
/// # Errors
/// Returns error if the text is not valid JSON.
pub fn parse_chat_data(raw: &str) -> Result<Vec<RawTab>> {
    let payload: Value = serde_json::from_str(raw).map_err(AppError::json_parse)?;

    let Some(tabs) = payload.get("tabs").and_then(Value::as_array) else {
        tracing::debug!("Payload has no tabs array");
        return Ok(Vec::new());
    };

    let parsed = tabs
        .iter()
        .enumerate()
        .filter_map(|(i, tab)| match RawTab::deserialize(tab) {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::debug!("Skipping malformed tab #{}: {}", i, e);
                None
            }
        })
        .collect();

    Ok(parsed)
}

/// Resolves the text of a bubble, or `None` if no location holds any.
#[must_use]
pub fn resolve_content(bubble: &Value) -> Option<String> {
    let fields = bubble.as_object()?;

    CONTENT_RULES.iter().find_map(|(name, rule)| {
        let content = rule(fields).filter(|c| !c.trim().is_empty())?;
        tracing::trace!("Bubble content resolved from {}", name);
        Some(content)
    })
}

/// Normalizes one bubble into a message. Bubbles without content are dropped.
#[must_use]
pub fn parse_bubble(bubble: &Value) -> Option<Message> {
    let content = resolve_content(bubble)?;

    let timestamp = bubble
        .get("timestamp")
        .and_then(stringify)
        .unwrap_or_else(|| UNKNOWN_TIME.to_string());
    let message_type = bubble
        .get("type")
        .and_then(stringify)
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

    Some(Message {
        timestamp,
        message_type,
        content,
    })
}

/// Renders a JSON value as text: strings verbatim, anything else as compact
/// JSON. `null` has no text.
#[must_use]
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn nested_data(bubble: &Map<String, Value>) -> Option<&Map<String, Value>> {
    bubble.get("data").and_then(Value::as_object)
}

fn scalar_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(stringify)
}

fn data_parts(bubble: &Map<String, Value>) -> Option<String> {
    nested_data(bubble).and_then(joined_parts)
}

fn data_text(bubble: &Map<String, Value>) -> Option<String> {
    nested_data(bubble).and_then(|data| scalar_field(data, "text"))
}

fn top_level_text(bubble: &Map<String, Value>) -> Option<String> {
    scalar_field(bubble, "text")
}

fn top_level_message(bubble: &Map<String, Value>) -> Option<String> {
    scalar_field(bubble, "message")
}

/// Newline-joins the truthy elements of a `parts` array.
fn joined_parts(fields: &Map<String, Value>) -> Option<String> {
    let parts = fields.get("parts")?.as_array()?;

    let joined = parts
        .iter()
        .filter(|part| is_truthy(part))
        .filter_map(stringify)
        .collect::<Vec<_>>()
        .join("\n");

    Some(joined)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_parts_wins_over_everything() {
        let bubble = json!({
            "data": { "parts": ["part1", "", null, "part2"], "text": "flat" },
            "parts": ["outer"],
            "text": "top",
            "message": "msg"
        });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("part1\npart2"));
    }

    #[test]
    fn test_data_text_used_without_parts() {
        let bubble = json!({ "data": { "text": "nested" }, "text": "top" });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("nested"));
    }

    #[test]
    fn test_top_level_parts_before_text() {
        let bubble = json!({ "parts": ["a", "b"], "text": "top" });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_top_level_text_verbatim() {
        let bubble = json!({ "type": "user", "text": "  hello\n" });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("  hello\n"));
    }

    #[test]
    fn test_message_field_last_resort() {
        let bubble = json!({ "message": "fallback" });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("fallback"));
    }

    #[test]
    fn test_bubble_without_content_is_dropped() {
        let bubble = json!({ "type": "ai", "timestamp": 1, "data": {} });
        assert!(resolve_content(&bubble).is_none());
        assert!(parse_bubble(&bubble).is_none());
    }

    #[test]
    fn test_blank_rule_falls_through() {
        let bubble = json!({ "data": { "parts": ["", null] }, "text": "later" });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("later"));

        let bubble = json!({ "text": "   \n", "message": "real" });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("real"));
    }

    #[test]
    fn test_non_string_parts_are_stringified() {
        let bubble = json!({ "parts": ["a", 42, false, 0, {"k": "v"}, []] });
        assert_eq!(resolve_content(&bubble).as_deref(), Some("a\n42\n{\"k\":\"v\"}"));
    }

    #[test]
    fn test_non_object_bubble_has_no_content() {
        assert!(resolve_content(&json!("just a string")).is_none());
        assert!(resolve_content(&json!(null)).is_none());
    }

    #[test]
    fn test_parse_bubble_defaults() {
        let msg = parse_bubble(&json!({ "text": "hi" })).unwrap();
        assert_eq!(msg.timestamp, UNKNOWN_TIME);
        assert_eq!(msg.message_type, UNKNOWN_TYPE);
        assert_eq!(msg.content, "hi");

        let msg = parse_bubble(&json!({ "text": "hi", "type": "user", "timestamp": 1_700_000_000 }))
            .unwrap();
        assert_eq!(msg.message_type, "user");
        assert_eq!(msg.timestamp, "1700000000");
    }

    #[test]
    fn test_parse_chat_data_tabs() {
        let raw = r#"{"tabs":[{"chatTitle":"A","tabId":"1","bubbles":[]},{"tabId":"2"},"junk"]}"#;
        let tabs = parse_chat_data(raw).unwrap();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].chat_title, Some(json!("A")));
        assert!(tabs[1].bubbles.is_none());
    }

    #[test]
    fn test_parse_chat_data_without_tabs() {
        assert!(parse_chat_data(r#"{"other":1}"#).unwrap().is_empty());
        assert!(parse_chat_data("[1,2,3]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_chat_data_invalid_json() {
        assert!(matches!(
            parse_chat_data("{broken"),
            Err(AppError::JsonParse { .. })
        ));
    }
}
