use crate::server::{
    error::{config::ConfigError, form_agent::FormAgentError, AppError},
    model::form_agent::FormAgent,
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";

/// Reply text the agents use to sign off a finished conversation.
pub const DEFAULT_COMPLETION_MARKER: &str = "Thank you for using AutoForms!";

pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    /// Work factor used when hashing new passwords.
    pub bcrypt_cost: u32,
    pub form_agents: FormAgentConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            server_addr: optional_env("SERVER_ADDR")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            bcrypt_cost: match optional_env("BCRYPT_COST") {
                Some(cost) => cost.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar("BCRYPT_COST".to_string(), cost.clone())
                })?,
                None => bcrypt::DEFAULT_COST,
            },
            form_agents: FormAgentConfig::from_env(),
        })
    }
}

/// Addresses of the external form agents.
///
/// Every address is optional at startup; a route that needs a missing one fails with
/// `FormAgentError::EndpointNotConfigured` when it is called.
#[derive(Debug, Clone, Default)]
pub struct FormAgentConfig {
    pub creation_url: Option<String>,
    pub filling_url: Option<String>,
    pub editing_url: Option<String>,
    pub analysis_url: Option<String>,
    /// Sent as a bearer token on every agent request when set.
    pub api_key: Option<String>,
    pub completion_marker: String,
}

impl FormAgentConfig {
    pub fn from_env() -> Self {
        Self {
            creation_url: optional_env(FormAgent::Creation.env_var()),
            filling_url: optional_env(FormAgent::Filling.env_var()),
            editing_url: optional_env(FormAgent::Editing.env_var()),
            analysis_url: optional_env(FormAgent::Analysis.env_var()),
            api_key: optional_env("FORM_SERVICE_API_KEY"),
            completion_marker: optional_env("COMPLETION_MARKER")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MARKER.to_string()),
        }
    }

    /// Resolves the address of an agent.
    ///
    /// # Returns
    /// - `Ok(&str)` - The configured address
    /// - `Err(FormAgentError::EndpointNotConfigured)` - No address set for `agent`
    pub fn endpoint(&self, agent: FormAgent) -> Result<&str, FormAgentError> {
        let url = match agent {
            FormAgent::Creation => &self.creation_url,
            FormAgent::Filling => &self.filling_url,
            FormAgent::Editing => &self.editing_url,
            FormAgent::Analysis => &self.analysis_url,
        };

        url.as_deref().ok_or(FormAgentError::EndpointNotConfigured(agent))
    }
}

/// Reads an environment variable that must be set to a non-empty value.
fn required_env(name: &str) -> Result<String, ConfigError> {
    optional_env(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
