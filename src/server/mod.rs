//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations, and
//! reqwest to talk to the external form agents that drive every conversation.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, field checks, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, agent addresses)
//! - **Startup** (`startup`) - Database connection, HTTP client and shutdown handling
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Request field checks and JSON extraction from agent replies
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks required fields, converts DTOs to params, calls service
//! 3. **Service** calls the form agents when needed and decides what to persist
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
