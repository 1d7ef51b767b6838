//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Registered user with their stored credential.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    pub fullname: Option<String>,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here and never leaves the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            fullname: self.fullname,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            fullname: entity.fullname,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub fullname: Option<String>,
    /// Already-hashed password; repositories never see plain text.
    pub password_hash: String,
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub username: String,
    pub fullname: Option<String>,
    pub password: String,
}

/// Parameters for checking a username/password pair.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}
