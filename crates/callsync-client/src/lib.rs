mod elevenlabs;
mod error;
mod tuner;

pub use elevenlabs::ElevenLabsClient;
pub use error::ClientError;
pub use tuner::TunerClient;

use callsync_core::SyncWindow;
use callsync_transcript::{Conversation, ConversationSummary, CreateCallRequest, CreateCallResponse};

/// Read side of a run: list conversations for the configured agent, then
/// fetch each one in full. Implemented by `ElevenLabsClient`; the sync
/// driver is written against this trait so it can run against fakes.
pub trait Source {
    /// List conversation summaries whose start time the API believes falls
    /// in `window`. Callers must still apply their own exact filter — the
    /// listing may be a superset.
    fn list_conversations(&self, window: &SyncWindow)
        -> Result<Vec<ConversationSummary>, ClientError>;

    fn fetch_conversation(&self, conversation_id: &str) -> Result<Conversation, ClientError>;
}

/// Write side of a run. Implemented by `TunerClient`.
pub trait Destination {
    fn create_call(&self, request: &CreateCallRequest) -> Result<CreateCallResponse, ClientError>;
}
