//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{form::create_form, submission::create_submission, user::create_user};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a form authored by that user.
///
/// # Returns
/// - `Ok((user, form))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_form_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::form::Model), DbErr> {
    let user = create_user(db).await?;
    let form = create_form(db, user.id).await?;

    Ok((user, form))
}

/// Creates a user, a form authored by that user and one submission for the form.
///
/// # Returns
/// - `Ok((user, form, submission))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_submission_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::form::Model,
        entity::submission::Model,
    ),
    DbErr,
> {
    let (user, form) = create_form_with_dependencies(db).await?;
    let submission = create_submission(db, form.id).await?;

    Ok((user, form, submission))
}
