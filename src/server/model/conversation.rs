//! Conversations with form agents and the replies they produce.

use serde::Serialize;
use serde_json::Value;

use crate::model::conversation::MessageDto;

/// One turn of a conversation, forwarded verbatim to the agents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn from_dto(dto: MessageDto) -> Self {
        Self {
            role: dto.role,
            content: dto.content,
        }
    }
}

/// Ordered list of messages exchanged with an agent so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn from_dto(messages: Vec<MessageDto>) -> Self {
        Self::new(messages.into_iter().map(Message::from_dto).collect())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Content of the second-to-last message.
    ///
    /// By the time an agent signs off, the last message is its closing line and the one
    /// before it carries the summary the analysis agent should structure. Returns `None`
    /// for conversations with fewer than two messages.
    pub fn analysis_query(&self) -> Option<&str> {
        let index = self.messages.len().checked_sub(2)?;
        self.messages.get(index).map(|m| m.content.as_str())
    }
}

/// Raw JSON reply from a form agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply(pub Value);

impl AgentReply {
    /// Text of the reply: its `content` string, or the reply itself when it is a string.
    pub fn text(&self) -> Option<&str> {
        match &self.0 {
            Value::String(text) => Some(text),
            value => value.get("content").and_then(Value::as_str),
        }
    }

    /// Whether the reply text contains the completion marker.
    pub fn is_complete(&self, marker: &str) -> bool {
        self.text().is_some_and(|text| text.contains(marker))
    }

    /// The part of the reply worth extracting a result from: `content` when present,
    /// otherwise the whole reply.
    pub fn into_content(self) -> Value {
        match self.0 {
            Value::Object(mut object) => match object.remove("content") {
                Some(content) => content,
                None => Value::Object(object),
            },
            other => other,
        }
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Result of one turn of a two-phase conversation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationOutcome<T> {
    /// The agent has not signalled completion; carries its raw reply.
    InProgress(Value),
    /// The agent signalled completion and the result was persisted.
    Completed(T),
}
