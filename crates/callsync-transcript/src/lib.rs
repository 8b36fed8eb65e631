mod call;
mod conversation;
mod map;
mod segment;
mod turn;

pub use call::{build_call_request, CreateCallRequest, CreateCallResponse};
pub use conversation::{Charging, Conversation, ConversationMetadata, ConversationSummary, PhoneCall};
pub use map::{map_transcript, MapError};
pub use segment::{Segment, SegmentRole, ToolInfo, ToolResult};
pub use turn::{RawToolCall, RawToolResult, RawTurn};
