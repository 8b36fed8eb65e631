use std::time::Duration;

use callsync_transcript::{CreateCallRequest, CreateCallResponse};
use tracing::debug;

use crate::error::ClientError;
use crate::Destination;

const TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for Tuner's public create-call endpoint.
pub struct TunerClient {
    api_key: String,
    api_url: String,
    workspace_id: String,
    agent_remote_identifier: String,
}

impl TunerClient {
    pub fn new(
        api_key: String,
        api_url: String,
        workspace_id: String,
        agent_remote_identifier: String,
    ) -> Self {
        TunerClient {
            api_key,
            api_url,
            workspace_id,
            agent_remote_identifier,
        }
    }
}

impl Destination for TunerClient {
    fn create_call(&self, request: &CreateCallRequest) -> Result<CreateCallResponse, ClientError> {
        let submission_error = |reason: String| ClientError::Submission {
            call_id: request.call_id.clone(),
            reason,
        };

        let payload =
            serde_json::to_string(request).map_err(|e| submission_error(e.to_string()))?;

        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .http_status_as_error(false)
            .build()
            .new_agent();
        let mut response = agent
            .post(&self.api_url)
            .header("X-API-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .query("workspace_id", &self.workspace_id)
            .query("agent_remote_identifier", &self.agent_remote_identifier)
            .send(payload)
            .map_err(|e| submission_error(e.to_string()))?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| submission_error(e.to_string()))?;

        if !matches!(status.as_u16(), 200 | 201) {
            return Err(submission_error(format!("status {status}: {body}")));
        }

        debug!(call_id = %request.call_id, "call accepted by Tuner");
        serde_json::from_str(&body).map_err(|e| submission_error(e.to_string()))
    }
}
