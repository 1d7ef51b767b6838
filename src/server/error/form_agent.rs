use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::form_agent::FormAgent};

#[derive(Error, Debug)]
pub enum FormAgentError {
    /// No address is configured for the agent a route depends on.
    ///
    /// Only discovered when a request needs the agent, and raised before any outbound
    /// call of that request is made.
    #[error("No endpoint configured for the {0} agent")]
    EndpointNotConfigured(FormAgent),
}

/// Converts form agent errors into HTTP responses.
///
/// - `EndpointNotConfigured` → 500 Internal Server Error naming the missing agent
impl IntoResponse for FormAgentError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
