use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::conversation::{ConversationStatus, MessageDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormDto {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    #[schema(value_type = Object)]
    pub fields: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormDto {
    pub messages: Option<Vec<MessageDto>>,
    pub user_id: Option<i32>,
}

/// Body shared by the editing and filling conversations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormConversationRequestDto {
    pub messages: Option<Vec<MessageDto>>,
    pub form_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFormDto {
    pub form_id: Option<i32>,
    pub query: Option<String>,
}

/// Body of routes that only need to identify a form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormIdDto {
    pub form_id: Option<i32>,
}

/// Outcome of a creation or editing conversation turn.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormConversationDto {
    pub status: ConversationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub reply: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDto {
    #[schema(value_type = Object)]
    pub analysis: Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedFormDto {
    pub deleted: i32,
}
