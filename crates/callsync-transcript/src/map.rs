use crate::segment::{Segment, SegmentRole, ToolInfo, ToolResult};
use crate::turn::RawTurn;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// A tool call's `params_as_json` did not decode as JSON. The whole
    /// conversation's mapping is aborted; no partial segment list escapes.
    #[error("turn {turn_index}: tool call {request_id:?} has malformed params_as_json: {source}")]
    MalformedToolParams {
        turn_index: usize,
        request_id: Option<String>,
        #[source]
        source: serde_json::Error,
    },
}

/// Map an ElevenLabs transcript to Tuner's flat segment list.
///
/// One pass over the turns, in order. Per turn: the message segment first
/// (if the turn carries a non-empty message), then one `agent_function`
/// segment per tool call, then one `agent_result` segment per tool result,
/// each in input order. Turns without `time_in_call_secs` contribute
/// nothing — there is no timing to anchor a segment to.
///
/// A message segment's `end_ms` is the `start_ms` of the next
/// message-bearing turn; the last message in the conversation has no
/// `end_ms`. Tool segments are point events at the owning turn's
/// `start_ms`.
pub fn map_transcript(turns: &[RawTurn]) -> Result<Vec<Segment>, MapError> {
    let mut segments = Vec::new();

    for (turn_index, turn) in turns.iter().enumerate() {
        let Some(secs) = turn.time_in_call_secs else {
            continue;
        };
        let start_ms = to_ms(secs);

        if let Some(text) = non_empty(turn.message.as_deref()) {
            let end_ms = next_message_start_ms(turns, turn_index);
            let mut segment = Segment::message(
                normalize_role(&turn.role),
                text.to_string(),
                start_ms,
                end_ms,
            );
            segment.metadata = turn_metadata(turn);
            segments.push(segment);
        }

        for call in &turn.tool_calls {
            let params = match call.params_as_json.as_deref() {
                Some(raw) => Some(serde_json::from_str::<Value>(raw).map_err(|source| {
                    MapError::MalformedToolParams {
                        turn_index,
                        request_id: call.request_id.clone(),
                        source,
                    }
                })?),
                None => None,
            };
            let mut segment = Segment::tool_event(
                SegmentRole::AgentFunction,
                ToolInfo {
                    name: call.tool_name.clone(),
                    request_id: call.request_id.clone(),
                    params,
                    ..Default::default()
                },
                start_ms,
            );
            if let Some(kind) = &call.kind {
                segment.metadata.insert("type".into(), Value::String(kind.clone()));
            }
            segments.push(segment);
        }

        for result in &turn.tool_results {
            let is_error = result.is_error;
            let error = if is_error == Some(true) {
                result.raw_error_message.clone()
            } else {
                None
            };
            let mut segment = Segment::tool_event(
                SegmentRole::AgentResult,
                ToolInfo {
                    name: result.tool_name.clone(),
                    request_id: result.request_id.clone(),
                    result: result.result_value.clone().map(|value| ToolResult {
                        value: Some(value),
                    }),
                    is_error,
                    error,
                    ..Default::default()
                },
                start_ms,
            );
            if let Some(latency) = result.tool_latency_secs {
                if let Some(num) = serde_json::Number::from_f64(latency) {
                    segment
                        .metadata
                        .insert("tool_latency_secs".into(), Value::Number(num));
                }
            }
            segments.push(segment);
        }
    }

    Ok(segments)
}

fn to_ms(secs: f64) -> i64 {
    (secs * 1000.0).round() as i64
}

fn non_empty(message: Option<&str>) -> Option<&str> {
    message.filter(|m| !m.is_empty())
}

/// ElevenLabs emits "assistant" for some turn sources; Tuner only knows
/// "user" and "agent".
fn normalize_role(role: &str) -> SegmentRole {
    match role {
        "user" => SegmentRole::User,
        _ => SegmentRole::Agent,
    }
}

/// Forward lookahead: `start_ms` of the next turn after `index` that
/// carries both timing and a non-empty message.
fn next_message_start_ms(turns: &[RawTurn], index: usize) -> Option<i64> {
    turns[index + 1..].iter().find_map(|turn| {
        let secs = turn.time_in_call_secs?;
        non_empty(turn.message.as_deref()).map(|_| to_ms(secs))
    })
}

/// Provider-specific fields carried through on message segments. Absent
/// fields are omitted, never null-filled.
fn turn_metadata(turn: &RawTurn) -> Map<String, Value> {
    let mut metadata = Map::new();
    if let Some(interrupted) = turn.interrupted {
        metadata.insert("interrupted".into(), Value::Bool(interrupted));
    }
    if let Some(v) = &turn.agent_metadata {
        metadata.insert("agent_metadata".into(), v.clone());
    }
    if let Some(v) = &turn.conversation_turn_metrics {
        metadata.insert("conversation_turn_metrics".into(), v.clone());
    }
    if let Some(v) = &turn.source_medium {
        metadata.insert("source_medium".into(), Value::String(v.clone()));
    }
    if let Some(v) = &turn.rag_retrieval_info {
        metadata.insert("rag_retrieval_info".into(), v.clone());
    }
    if let Some(v) = &turn.llm_usage {
        metadata.insert("llm_usage".into(), v.clone());
    }
    if let Some(v) = &turn.original_message {
        metadata.insert("original_message".into(), Value::String(v.clone()));
    }
    if let Some(v) = &turn.feedback {
        metadata.insert("feedback".into(), v.clone());
    }
    metadata
}
