//! Form factory for creating test form entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test forms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::form::FormFactory;
///
/// let form = FormFactory::new(&db, user.id)
///     .title("Feedback")
///     .fields(json!([{ "label": "Rating", "type": "number" }]))
///     .build()
///     .await?;
/// ```
pub struct FormFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    fields: Value,
}

impl<'a> FormFactory<'a> {
    /// Creates a new FormFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Form {id}"` where id is auto-incremented
    /// - fields: a single required text field named `"Name"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the user who owns the form
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Form {}", id),
            fields: json!([{ "label": "Name", "type": "text", "required": true }]),
        }
    }

    /// Sets the form title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the field schema.
    pub fn fields(mut self, fields: Value) -> Self {
        self.fields = fields;
        self
    }

    /// Builds and inserts the form entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::form::Model)` - Created form entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::form::Model, DbErr> {
        entity::form::ActiveModel {
            title: ActiveValue::Set(self.title),
            author_id: ActiveValue::Set(self.author_id),
            fields: ActiveValue::Set(self.fields),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a form with default values for the given author.
///
/// Shorthand for `FormFactory::new(db, author_id).build().await`.
pub async fn create_form(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::form::Model, DbErr> {
    FormFactory::new(db, author_id).build().await
}
