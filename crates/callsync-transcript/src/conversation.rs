use crate::turn::RawTurn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── ElevenLabs conversation models ──

/// One item of the conversation list response. Only the id and start time
/// matter for window filtering; the rest of the summary is ignored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConversationSummary {
    pub conversation_id: String,
    #[serde(default)]
    pub start_time_unix_secs: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PhoneCall {
    #[serde(default)]
    pub external_number: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Charging {
    #[serde(default)]
    pub llm_price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Call-level metadata from the conversation GET response. Fields we do not
/// interpret stay in `extra` and are forwarded to Tuner verbatim inside
/// `general_meta_data_raw`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ConversationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_unix_secs: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_duration_secs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_call: Option<PhoneCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charging: Option<Charging>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full conversation record. `recording_url` is not part of the GET
/// response; the client attaches it after probing the audio endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Conversation {
    pub conversation_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub transcript: Vec<RawTurn>,
    #[serde(default)]
    pub metadata: Option<ConversationMetadata>,
    #[serde(default)]
    pub analysis: Option<Value>,
    #[serde(default)]
    pub recording_url: Option<String>,
}
