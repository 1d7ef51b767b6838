//! Form domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{model::form::FormDto, server::model::conversation::Conversation};

/// Title given to a created form when the analysis result does not name one.
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

/// A form owned by a user, with its field schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub id: i32,
    pub title: String,
    /// ID of the user who created the form.
    pub author_id: i32,
    /// Ordered field schema, stored as produced by the agents.
    pub fields: Value,
    pub created_at: DateTime<Utc>,
}

impl Form {
    /// Converts the form domain model to a DTO for API responses.
    pub fn into_dto(self) -> FormDto {
        FormDto {
            id: self.id,
            title: self.title,
            author_id: self.author_id,
            fields: self.fields,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a form domain model at the repository boundary.
    pub fn from_entity(entity: entity::form::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author_id: entity.author_id,
            fields: entity.fields,
            created_at: entity.created_at,
        }
    }
}

/// Title and field schema pulled out of an analysis result.
///
/// The analysis agent is expected to answer with an object like
/// `{"title": "...", "fields": [...]}`. When `fields` is absent the whole value is
/// treated as the schema, and a missing or non-string `title` falls back to
/// [`DEFAULT_FORM_TITLE`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub fields: Value,
}

impl FormDraft {
    pub fn from_analysis(analysis: Value) -> Self {
        let title = analysis
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_FORM_TITLE)
            .to_string();

        Self {
            title,
            fields: Self::fields_from_analysis(analysis),
        }
    }

    /// Field schema of an analysis result, used on its own when editing.
    pub fn fields_from_analysis(analysis: Value) -> Value {
        match analysis {
            Value::Object(mut object) => match object.remove("fields") {
                Some(fields) => fields,
                None => Value::Object(object),
            },
            other => other,
        }
    }
}

/// Parameters for inserting a new form row.
#[derive(Debug, Clone)]
pub struct CreateFormParam {
    pub title: String,
    pub author_id: i32,
    pub fields: Value,
}

/// Parameters for a creation conversation turn.
#[derive(Debug, Clone)]
pub struct CreateFormConversationParam {
    pub author_id: i32,
    pub conversation: Conversation,
}

/// Parameters for an editing or filling conversation turn on an existing form.
#[derive(Debug, Clone)]
pub struct FormConversationParam {
    pub form_id: i32,
    pub conversation: Conversation,
}

/// Parameters for asking the analysis agent a question about a form's submissions.
#[derive(Debug, Clone)]
pub struct AnalyzeFormParam {
    pub form_id: i32,
    pub query: String,
}
