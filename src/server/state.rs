//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::config::FormAgentConfig;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `Arc<FormAgentConfig>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Opened once by `startup::connect_to_database` and closed by
    /// `startup::shutdown` when the server stops.
    pub db: DatabaseConnection,

    /// HTTP client for calls to the form agents.
    pub http_client: reqwest::Client,

    /// Addresses of the form agents and the completion marker they use.
    pub form_agents: Arc<FormAgentConfig>,

    /// Work factor for hashing passwords on signup.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for form agent requests
    /// - `form_agents` - Form agent configuration
    /// - `bcrypt_cost` - Password hashing work factor
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        form_agents: FormAgentConfig,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            db,
            http_client,
            form_agents: Arc::new(form_agents),
            bcrypt_cost,
        }
    }
}
