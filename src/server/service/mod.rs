//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Password hashing, completion detection, result extraction
//! - **Orchestration**: Coordinating form agent calls with repository writes
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod form;
pub mod form_agent;
pub mod form_conversation;
pub mod submission;
pub mod user;
