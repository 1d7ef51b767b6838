//! Form service for lookups and deletion.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{form::FormRepository, user::UserRepository},
    error::AppError,
    model::form::Form,
};

/// Service providing form lookups and deletion.
pub struct FormService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormService<'a> {
    /// Creates a new FormService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FormService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a form by id.
    ///
    /// # Returns
    /// - `Ok(Form)` - The stored form
    /// - `Err(AppError::NotFound)` - No form with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, form_id: i32) -> Result<Form, AppError> {
        let form_repo = FormRepository::new(self.db);

        form_repo
            .find_by_id(form_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Form not found".to_string()))
    }

    /// Lists the forms authored by a user, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Form>)` - The user's forms, possibly empty
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Form>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let form_repo = FormRepository::new(self.db);

        if user_repo.find_by_id(author_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(form_repo.find_by_author(author_id).await?)
    }

    /// Deletes a form together with its submissions.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the deleted form
    /// - `Err(AppError::NotFound)` - No form with that id
    /// - `Err(AppError::DbErr)` - Database error, nothing deleted
    pub async fn delete(&self, form_id: i32) -> Result<i32, AppError> {
        let form_repo = FormRepository::new(self.db);

        if !form_repo.delete(form_id).await? {
            return Err(AppError::NotFound("Form not found".to_string()));
        }

        tracing::info!("Deleted form {}", form_id);

        Ok(form_id)
    }
}
