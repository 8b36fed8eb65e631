use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Raw ElevenLabs turn ──

/// One turn of an ElevenLabs conversation transcript, as returned by the
/// conversation GET endpoint. Everything beyond `role` is optional; absent
/// fields deserialize to their defaults rather than failing the whole
/// conversation. `multivoice_message` and `llm_override` are deliberately
/// not modeled — Tuner has no use for them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawTurn {
    pub role: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub time_in_call_secs: Option<f64>,
    #[serde(default)]
    pub tool_calls: Vec<RawToolCall>,
    #[serde(default)]
    pub tool_results: Vec<RawToolResult>,
    #[serde(default)]
    pub interrupted: Option<bool>,
    #[serde(default)]
    pub agent_metadata: Option<Value>,
    #[serde(default)]
    pub conversation_turn_metrics: Option<Value>,
    #[serde(default)]
    pub source_medium: Option<String>,
    #[serde(default)]
    pub rag_retrieval_info: Option<Value>,
    #[serde(default)]
    pub llm_usage: Option<Value>,
    #[serde(default)]
    pub original_message: Option<String>,
    #[serde(default)]
    pub feedback: Option<Value>,
}

/// Tool invocation recorded inside a turn. `params_as_json` is a JSON
/// document encoded as a string by the ElevenLabs API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawToolCall {
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub params_as_json: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Result of a tool invocation, matched to its call by `request_id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawToolResult {
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub result_value: Option<Value>,
    #[serde(default)]
    pub is_error: Option<bool>,
    #[serde(default)]
    pub raw_error_message: Option<String>,
    #[serde(default)]
    pub tool_latency_secs: Option<f64>,
}
