//! Submission factory for creating test submission entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test submissions with customizable fields.
pub struct SubmissionFactory<'a> {
    db: &'a DatabaseConnection,
    form_id: i32,
    data: Value,
}

impl<'a> SubmissionFactory<'a> {
    /// Creates a new SubmissionFactory with default values.
    ///
    /// Defaults:
    /// - data: `{"Name": "Jane Doe"}`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `form_id` - ID of the form being answered
    pub fn new(db: &'a DatabaseConnection, form_id: i32) -> Self {
        Self {
            db,
            form_id,
            data: json!({ "Name": "Jane Doe" }),
        }
    }

    /// Sets the answer payload.
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Builds and inserts the submission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::submission::Model)` - Created submission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::submission::Model, DbErr> {
        entity::submission::ActiveModel {
            form_id: ActiveValue::Set(self.form_id),
            data: ActiveValue::Set(self.data),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a submission with default values for the given form.
pub async fn create_submission(
    db: &DatabaseConnection,
    form_id: i32,
) -> Result<entity::submission::Model, DbErr> {
    SubmissionFactory::new(db, form_id).build().await
}
