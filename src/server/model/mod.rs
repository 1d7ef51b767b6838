//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod conversation;
pub mod form;
pub mod form_agent;
pub mod submission;
pub mod user;
