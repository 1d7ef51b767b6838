//! Submission data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::submission::{CreateSubmissionParam, Submission};

/// Repository providing database operations for submissions.
///
/// Submissions are append-only: there is no update or single-row delete.
pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new submission.
    ///
    /// # Returns
    /// - `Ok(Submission)` - The created submission
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSubmissionParam) -> Result<Submission, DbErr> {
        let entity = entity::submission::ActiveModel {
            form_id: ActiveValue::Set(param.form_id),
            data: ActiveValue::Set(param.data),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Submission::from_entity(entity))
    }

    /// Gets all submissions for a form in the order they were received.
    pub async fn find_by_form(&self, form_id: i32) -> Result<Vec<Submission>, DbErr> {
        let entities = entity::prelude::Submission::find()
            .filter(entity::submission::Column::FormId.eq(form_id))
            .order_by_asc(entity::submission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Submission::from_entity).collect())
    }
}
