use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One turn of a conversation with a form agent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    /// Speaker of the turn, usually `user` or `assistant`.
    pub role: String,
    pub content: String,
}

/// Whether a two-phase conversation produced a persisted result yet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    /// The agent wants more input; `reply` carries its raw answer.
    InProgress,
    /// The agent signalled completion and the result was stored.
    Completed,
}
