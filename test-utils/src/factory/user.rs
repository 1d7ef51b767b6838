//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain-text password every factory user is created with unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .password("hunter22")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    fullname: Option<String>,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - fullname: `Some("User {id}")`
    /// - password: [`DEFAULT_PASSWORD`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            fullname: Some(format!("User {}", id)),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the optional full name.
    pub fn fullname(mut self, fullname: Option<String>) -> Self {
        self.fullname = fullname;
        self
    }

    /// Sets the plain-text password that gets hashed on insert.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Hashes the password and inserts the user entity into the database.
    ///
    /// Uses the minimum bcrypt cost to keep tests fast.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Hashing failed or database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash =
            bcrypt::hash(&self.password, 4).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            fullname: ActiveValue::Set(self.fullname),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
