use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Tuner unified transcript segment ──

/// Segment kind in Tuner's unified call timeline.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentRole {
    User,
    Agent,
    AgentFunction,
    AgentResult,
}

/// Tool output payload for `agent_result` segments.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ToolResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Tool details: `params` set for `agent_function`, `result`/`is_error`/
/// `error` set for `agent_result`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ToolInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ToolResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One entry of `transcript_with_tool_calls`. Message segments carry `text`
/// and an interval; tool segments carry `tool` and a point timestamp.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Segment {
    pub role: SegmentRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub start_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<ToolInfo>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl Segment {
    pub fn message(role: SegmentRole, text: String, start_ms: i64, end_ms: Option<i64>) -> Self {
        Segment {
            role,
            text: Some(text),
            start_ms,
            end_ms,
            tool: None,
            metadata: Map::new(),
        }
    }

    pub fn tool_event(role: SegmentRole, tool: ToolInfo, start_ms: i64) -> Self {
        Segment {
            role,
            text: None,
            start_ms,
            end_ms: None,
            tool: Some(tool),
            metadata: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(SegmentRole::AgentFunction).unwrap(),
            serde_json::json!("agent_function")
        );
        assert_eq!(
            serde_json::to_value(SegmentRole::User).unwrap(),
            serde_json::json!("user")
        );
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let seg = Segment::message(SegmentRole::Agent, "hello".into(), 2000, None);
        let json = serde_json::to_value(&seg).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("end_ms"));
        assert!(!obj.contains_key("tool"));
        assert!(!obj.contains_key("metadata"));
        assert_eq!(json["start_ms"], 2000);
    }

    #[test]
    fn tool_segment_omits_text_and_end() {
        let tool = ToolInfo {
            name: Some("lookup".into()),
            request_id: Some("r1".into()),
            params: Some(serde_json::json!({"q": 1})),
            ..Default::default()
        };
        let seg = Segment::tool_event(SegmentRole::AgentFunction, tool, 2000);
        let json = serde_json::to_value(&seg).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("text"));
        assert!(!obj.contains_key("end_ms"));
        assert_eq!(json["tool"]["name"], "lookup");
        assert!(!json["tool"].as_object().unwrap().contains_key("result"));
    }
}
