//! Form data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use serde_json::Value;

use crate::server::model::form::{CreateFormParam, Form};

/// Repository providing database operations for forms.
pub struct FormRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new form.
    ///
    /// # Returns
    /// - `Ok(Form)` - The created form
    /// - `Err(DbErr)` - Database error during insert (including an unknown author)
    pub async fn create(&self, param: CreateFormParam) -> Result<Form, DbErr> {
        let entity = entity::form::ActiveModel {
            title: ActiveValue::Set(param.title),
            author_id: ActiveValue::Set(param.author_id),
            fields: ActiveValue::Set(param.fields),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Form::from_entity(entity))
    }

    /// Replaces the field schema of a form wholesale.
    ///
    /// # Returns
    /// - `Ok(Some(Form))` - The updated form
    /// - `Ok(None)` - No form with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_fields(&self, id: i32, fields: Value) -> Result<Option<Form>, DbErr> {
        let Some(entity) = entity::prelude::Form::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::form::ActiveModel = entity.into();
        active.fields = ActiveValue::Set(fields);
        let entity = active.update(self.db).await?;

        Ok(Some(Form::from_entity(entity)))
    }

    /// Deletes a form together with its submissions.
    ///
    /// Both deletes run in one transaction so a form never disappears while leaving
    /// orphaned submissions behind.
    ///
    /// # Returns
    /// - `Ok(true)` - The form existed and was deleted
    /// - `Ok(false)` - No form with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Submission::delete_many()
            .filter(entity::submission::Column::FormId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Form::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds a form by id.
    ///
    /// # Returns
    /// - `Ok(Some(Form))` - Form found
    /// - `Ok(None)` - No form with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Form>, DbErr> {
        let entity = entity::prelude::Form::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Form::from_entity))
    }

    /// Gets all forms written by a user, newest first.
    pub async fn find_by_author(&self, author_id: i32) -> Result<Vec<Form>, DbErr> {
        let entities = entity::prelude::Form::find()
            .filter(entity::form::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::form::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Form::from_entity).collect())
    }
}
