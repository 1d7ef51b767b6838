//! HTTP client for the external form agents.
//!
//! Every call is a single JSON POST to the agent's configured address. There is no
//! timeout, no retry and no status-code inspection: any reply whose body parses as JSON
//! is handed back, whatever its status.

use serde::Serialize;
use serde_json::Value;

use crate::server::{
    config::FormAgentConfig,
    error::AppError,
    model::{
        conversation::{AgentReply, Conversation},
        form_agent::{
            AnalysisKind, AnalysisPayload, ConversationPayload, ConversationWithFieldsPayload,
            FormAgent,
        },
    },
};

/// Client forwarding conversations and analysis queries to the form agents.
pub struct FormAgentClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a FormAgentConfig,
}

impl<'a> FormAgentClient<'a> {
    /// Creates a new FormAgentClient instance.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `config` - Agent addresses, API key and completion marker
    pub fn new(http_client: &'a reqwest::Client, config: &'a FormAgentConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Checks that every listed agent has an address before any of them is called.
    ///
    /// # Returns
    /// - `Ok(())` - All agents are configured
    /// - `Err(AppError::FormAgentErr)` - The first agent found without an address
    pub fn require(&self, agents: &[FormAgent]) -> Result<(), AppError> {
        for agent in agents {
            self.config.endpoint(*agent)?;
        }

        Ok(())
    }

    /// Whether a reply signals that the conversation is finished.
    pub fn is_complete(&self, reply: &AgentReply) -> bool {
        reply.is_complete(&self.config.completion_marker)
    }

    /// Forwards a conversation to the creation agent.
    pub async fn converse(
        &self,
        agent: FormAgent,
        conversation: &Conversation,
    ) -> Result<AgentReply, AppError> {
        let payload = ConversationPayload {
            messages: conversation.messages(),
        };

        self.send(agent, &payload).await
    }

    /// Forwards a conversation together with the form's current field schema.
    pub async fn converse_with_fields(
        &self,
        agent: FormAgent,
        conversation: &Conversation,
        fields: &Value,
    ) -> Result<AgentReply, AppError> {
        let payload = ConversationWithFieldsPayload {
            messages: conversation.messages(),
            form_fields: fields,
        };

        self.send(agent, &payload).await
    }

    /// Sends a query to the analysis agent.
    pub async fn analyze(&self, kind: AnalysisKind, query: &str) -> Result<AgentReply, AppError> {
        let payload = AnalysisPayload { kind, query };

        self.send(FormAgent::Analysis, &payload).await
    }

    /// POSTs a JSON payload to an agent and decodes the JSON reply.
    ///
    /// # Returns
    /// - `Ok(AgentReply)` - The decoded reply body, regardless of status code
    /// - `Err(AppError::FormAgentErr)` - The agent has no configured address
    /// - `Err(AppError::ReqwestErr)` - Network failure or a body that is not JSON
    async fn send<T: Serialize>(
        &self,
        agent: FormAgent,
        payload: &T,
    ) -> Result<AgentReply, AppError> {
        let url = self.config.endpoint(agent)?;

        let mut request = self.http_client.post(url).json(payload);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        tracing::debug!("Forwarding request to the {} agent at {}", agent, url);

        let response = request.send().await?;
        let status = response.status();
        let reply = response.json::<Value>().await?;

        tracing::debug!("The {} agent replied with status {}", agent, status);

        Ok(AgentReply(reply))
    }
}
