//! Identifiers for the external form agents and the payloads sent to them.

use serde::Serialize;
use serde_json::Value;

use crate::server::model::conversation::Message;

/// One of the four external AI services the backend brokers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAgent {
    Creation,
    Filling,
    Editing,
    Analysis,
}

impl FormAgent {
    /// Environment variable holding the agent's address.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Creation => "FORM_CREATION_API_URL",
            Self::Filling => "FORM_FILLING_API_URL",
            Self::Editing => "FORM_EDITING_API_URL",
            Self::Analysis => "FORM_ANALYZER_API_URL",
        }
    }
}

impl std::fmt::Display for FormAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Creation => "creation",
            Self::Filling => "filling",
            Self::Editing => "editing",
            Self::Analysis => "analysis",
        };
        write!(f, "{}", name)
    }
}

/// The `type` sent with every analysis request, naming the flow that asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Create,
    Fill,
    Edit,
    Analyze,
}

/// Body sent to the creation agent.
#[derive(Debug, Serialize)]
pub struct ConversationPayload<'a> {
    pub messages: &'a [Message],
}

/// Body sent to the filling and editing agents, which need the current schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationWithFieldsPayload<'a> {
    pub messages: &'a [Message],
    pub form_fields: &'a Value,
}

/// Body sent to the analysis agent.
#[derive(Debug, Serialize)]
pub struct AnalysisPayload<'a> {
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
    pub query: &'a str,
}
