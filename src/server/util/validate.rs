//! Presence checks for request bodies.
//!
//! Routes only check that required fields are there and non-empty; shape and type are
//! left to JSON decoding.

use crate::server::error::AppError;

/// Values that can be absent even when the JSON key is present.
pub trait Present {
    fn is_present(&self) -> bool;
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Present for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for i32 {
    fn is_present(&self) -> bool {
        true
    }
}

/// Unwraps a required request field.
///
/// # Arguments
/// - `value` - The field as decoded from the request body
/// - `name` - Field name used in the error message
///
/// # Returns
/// - `Ok(T)` - The field is present and non-empty
/// - `Err(AppError::BadRequest)` - The field is missing, an empty string, or an empty list
pub fn required<T: Present>(value: Option<T>, name: &str) -> Result<T, AppError> {
    match value {
        Some(value) if value.is_present() => Ok(value),
        _ => Err(AppError::BadRequest(format!(
            "Missing required field: {}",
            name
        ))),
    }
}
