//! HTTP request handlers.
//!
//! Controllers check that required fields are present, convert DTOs into params, call
//! the matching service and turn domain models back into DTOs.

pub mod auth;
pub mod form;
pub mod submission;
pub mod user;

#[cfg(test)]
mod test;
