//! Submission domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::model::submission::SubmissionDto;

/// One completed answer-set for a form. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: i32,
    pub form_id: i32,
    /// Answer payload extracted from the analysis agent.
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    pub fn into_dto(self) -> SubmissionDto {
        SubmissionDto {
            id: self.id,
            form_id: self.form_id,
            data: self.data,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::submission::Model) -> Self {
        Self {
            id: entity.id,
            form_id: entity.form_id,
            data: entity.data,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new submission row.
#[derive(Debug, Clone)]
pub struct CreateSubmissionParam {
    pub form_id: i32,
    pub data: Value,
}
