//! Request and response DTOs for the public HTTP API.
//!
//! Request DTOs keep every field optional so that presence checks happen in the
//! controllers and a missing field surfaces as 400 Bad Request with a readable message
//! instead of a JSON decoding rejection.

pub mod api;
pub mod conversation;
pub mod form;
pub mod submission;
pub mod user;
