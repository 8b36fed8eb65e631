use std::time::Duration;

use callsync_core::SyncWindow;
use callsync_transcript::{Conversation, ConversationSummary};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::Source;

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_SIZE: &str = "100";

/// Blocking client for the ElevenLabs Conversational AI endpoints.
pub struct ElevenLabsClient {
    api_key: String,
    agent_id: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ListConversationsResponse {
    #[serde(default)]
    conversations: Vec<ConversationSummary>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl ElevenLabsClient {
    pub fn new(api_key: String, agent_id: String) -> Self {
        ElevenLabsClient {
            api_key,
            agent_id,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host. Used by integration setups
    /// against a local stand-in server.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn list_error(&self, reason: String) -> ClientError {
        ClientError::SourceList {
            agent_id: self.agent_id.clone(),
            reason,
        }
    }

    /// Probe the conversation audio endpoint for a recording URL.
    /// The endpoint is deprecated upstream; any failure falls back to a
    /// single-space placeholder, which Tuner accepts as "no recording".
    fn recording_url(&self, conversation_id: &str) -> String {
        let url = format!(
            "{}/v1/convai/conversations/{conversation_id}/audio",
            self.base_url
        );
        let result = agent()
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .call();
        match result {
            Ok(response) if response.status().is_success() => url,
            _ => {
                warn!(conversation_id, "no recording available, using placeholder");
                " ".to_string()
            }
        }
    }
}

impl Source for ElevenLabsClient {
    fn list_conversations(
        &self,
        window: &SyncWindow,
    ) -> Result<Vec<ConversationSummary>, ClientError> {
        let url = format!("{}/v1/convai/conversations", self.base_url);
        let mut all = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = agent()
                .get(&url)
                .header("xi-api-key", &self.api_key)
                .query("agent_id", &self.agent_id)
                .query("call_start_after_unix", &window.start.to_string())
                .query("call_start_before_unix", &window.end.to_string())
                .query("page_size", PAGE_SIZE);
            if let Some(cursor) = &cursor {
                request = request.query("cursor", cursor);
            }

            let mut response = request.call().map_err(|e| self.list_error(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                let body = read_body(&mut response);
                return Err(self.list_error(format!("status {status}: {body}")));
            }
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| self.list_error(e.to_string()))?;
            let page: ListConversationsResponse =
                serde_json::from_str(&body).map_err(|e| self.list_error(e.to_string()))?;

            debug!(page_len = page.conversations.len(), "listed conversation page");
            all.extend(page.conversations);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(all)
    }

    fn fetch_conversation(&self, conversation_id: &str) -> Result<Conversation, ClientError> {
        let url = format!(
            "{}/v1/convai/conversations/{conversation_id}",
            self.base_url
        );
        let fetch_error = |reason: String| ClientError::Fetch {
            conversation_id: conversation_id.to_string(),
            reason,
        };

        let mut response = agent()
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .call()
            .map_err(|e| fetch_error(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = read_body(&mut response);
            return Err(fetch_error(format!("status {status}: {body}")));
        }
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| fetch_error(e.to_string()))?;
        let mut conversation: Conversation =
            serde_json::from_str(&body).map_err(|e| fetch_error(e.to_string()))?;

        conversation.recording_url = Some(self.recording_url(conversation_id));
        Ok(conversation)
    }
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(TIMEOUT))
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn read_body(response: &mut ureq::http::Response<ureq::Body>) -> String {
    response
        .body_mut()
        .read_to_string()
        .unwrap_or_else(|_| String::from("<unreadable body>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_tolerates_missing_pagination_fields() {
        let page: ListConversationsResponse = serde_json::from_str(
            r#"{"conversations":[{"conversation_id":"c1","start_time_unix_secs":1700000000}]}"#,
        )
        .unwrap();
        assert_eq!(page.conversations.len(), 1);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn list_response_with_cursor() {
        let page: ListConversationsResponse = serde_json::from_str(
            r#"{"conversations":[],"has_more":true,"next_cursor":"abc"}"#,
        )
        .unwrap();
        assert!(page.has_more);
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
    }
}
