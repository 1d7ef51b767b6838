//! Submission service for listing a form's responses.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{form::FormRepository, submission::SubmissionRepository},
    error::AppError,
    model::submission::Submission,
};

/// Service providing read access to submissions.
pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    /// Creates a new SubmissionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SubmissionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every submission of a form, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Submission>)` - Submissions of the form, possibly empty
    /// - `Err(AppError::NotFound)` - No form with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_form(&self, form_id: i32) -> Result<Vec<Submission>, AppError> {
        let form_repo = FormRepository::new(self.db);
        let submission_repo = SubmissionRepository::new(self.db);

        if form_repo.find_by_id(form_id).await?.is_none() {
            return Err(AppError::NotFound("Form not found".to_string()));
        }

        Ok(submission_repo.find_by_form(form_id).await?)
    }
}
