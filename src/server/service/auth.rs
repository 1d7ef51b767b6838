//! Authentication service for signup and login.
//!
//! Passwords are hashed with bcrypt before they reach the repository and are never
//! returned to callers; the domain `User` keeps the hash only for verification.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, SignupParam, User},
};

/// Service providing account creation and credential checks.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Work factor for hashing new passwords
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Creates an account with a hashed password.
    ///
    /// The username check is left to the unique index so that two concurrent signups
    /// for the same name cannot both succeed.
    ///
    /// # Arguments
    /// - `param` - Username, optional full name and plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::AuthErr(UsernameTaken))` - Username already registered
    /// - `Err(AppError::AuthErr(PasswordHash))` - bcrypt failure
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn signup(&self, param: SignupParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;

        let result = user_repo
            .create(CreateUserParam {
                username: param.username,
                fullname: param.fullname,
                password_hash,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Created account {} for {}", user.id, user.username);
                Ok(user)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthError::UsernameTaken.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Checks a username and password pair.
    ///
    /// # Arguments
    /// - `param` - Username and plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match; the stored account
    /// - `Err(AppError::NotFound)` - No account with that username
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Password does not match
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&param.username).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let verified = verify_password(param.password, user.password_hash.clone()).await?;
        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Hashes a password on the blocking thread pool.
///
/// bcrypt is CPU-bound for hundreds of milliseconds at the default cost and must not run
/// on a runtime worker.
async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(AuthError::from)?;

    Ok(hash)
}

/// Checks a password against a stored hash on the blocking thread pool.
async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Password verification task failed: {}", e))
        })?
        .map_err(AuthError::from)?;

    Ok(verified)
}
