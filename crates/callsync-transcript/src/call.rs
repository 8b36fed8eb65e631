use crate::conversation::Conversation;
use crate::map::{map_transcript, MapError};
use crate::segment::{Segment, SegmentRole};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Tuner create-call envelope ──

/// Request body for Tuner's public create-call endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateCallRequest {
    pub call_id: String,
    pub call_type: String,
    pub transcript_with_tool_calls: Vec<Segment>,
    /// Unix epoch milliseconds.
    pub start_timestamp: i64,
    /// Unix epoch milliseconds; >= start_timestamp.
    pub end_timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disconnection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_phone_number: Option<String>,
    /// USD cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_analysis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_meta_data_raw: Option<Value>,
}

/// Acknowledgment returned by Tuner on success.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateCallResponse {
    pub id: i64,
    pub provider_call_id: String,
    #[serde(default)]
    pub is_new: bool,
}

/// Per-minute talk-time rate folded into `call_cost`, on top of the
/// provider-reported LLM price.
const COST_PER_MINUTE_USD: f64 = 0.10;

/// Build the create-call request for one conversation. `now_unix` supplies
/// the fallback timestamp for records whose metadata lacks a start time.
///
/// Tuner rejects an empty timeline, so a conversation that maps to zero
/// segments gets a single placeholder agent segment spanning the call.
pub fn build_call_request(
    conversation: &Conversation,
    now_unix: i64,
) -> Result<CreateCallRequest, MapError> {
    let mut segments = map_transcript(&conversation.transcript)?;

    let metadata = conversation.metadata.as_ref();
    let start_timestamp = metadata
        .and_then(|m| m.start_time_unix_secs)
        .map(coerce_unix_ms);
    let duration_ms = metadata
        .and_then(|m| m.call_duration_secs)
        .map(|secs| (secs * 1000.0).round() as i64);

    if segments.is_empty() {
        segments.push(Segment::message(
            SegmentRole::Agent,
            "No transcript available".to_string(),
            0,
            Some(duration_ms.unwrap_or(1000)),
        ));
    }

    let (call_type, caller_phone_number) = match metadata.and_then(|m| m.phone_call.as_ref()) {
        Some(phone) => ("phone_call".to_string(), phone.external_number.clone()),
        None => ("voice".to_string(), None),
    };

    let mut cost_usd = 0.0;
    if let Some(price) = metadata
        .and_then(|m| m.charging.as_ref())
        .and_then(|c| c.llm_price)
    {
        cost_usd += price;
    }
    if let Some(secs) = metadata.and_then(|m| m.call_duration_secs) {
        cost_usd += (secs / 60.0) * COST_PER_MINUTE_USD;
    }

    let start = start_timestamp.unwrap_or(now_unix * 1000);
    let end = match (start_timestamp, duration_ms) {
        (Some(start), Some(duration)) => start + duration,
        _ => start + duration_ms.unwrap_or(60_000),
    };

    Ok(CreateCallRequest {
        call_id: conversation.conversation_id.clone(),
        call_type,
        transcript_with_tool_calls: segments,
        start_timestamp: start,
        end_timestamp: end,
        recording_url: conversation.recording_url.clone(),
        duration_ms,
        call_status: conversation.status.clone(),
        disconnection_reason: metadata.and_then(|m| m.termination_reason.clone()),
        caller_phone_number,
        call_cost: Some(cost_usd * 100.0),
        call_analysis: conversation.analysis.clone(),
        general_meta_data_raw: metadata
            .map(serde_json::to_value)
            .transpose()
            .unwrap_or_default(),
    })
}

/// Accept a Unix timestamp in seconds or milliseconds; return milliseconds.
fn coerce_unix_ms(value: i64) -> i64 {
    if value < 10_i64.pow(10) {
        value * 1000
    } else {
        value
    }
}
