use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Listing conversations failed. Fatal: without a list there is
    /// nothing to sync against.
    #[error("failed to list conversations for agent {agent_id}: {reason}")]
    SourceList { agent_id: String, reason: String },

    /// One conversation's full fetch failed; scoped to that conversation.
    #[error("failed to fetch conversation {conversation_id}: {reason}")]
    Fetch {
        conversation_id: String,
        reason: String,
    },

    /// Tuner rejected one call or could not be reached; scoped to that
    /// conversation. No protocol-level retry.
    #[error("failed to submit call {call_id}: {reason}")]
    Submission { call_id: String, reason: String },
}
