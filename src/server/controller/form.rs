use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        conversation::ConversationStatus,
        form::{
            AnalysisDto, AnalyzeFormDto, CreateFormDto, DeletedFormDto, FormConversationDto,
            FormConversationRequestDto, FormDto, FormIdDto,
        },
        user::UserIdDto,
    },
    server::{
        error::AppError,
        model::{
            conversation::{Conversation, ConversationOutcome},
            form::{AnalyzeFormParam, CreateFormConversationParam, Form, FormConversationParam},
        },
        service::{
            form::FormService, form_agent::FormAgentClient,
            form_conversation::FormConversationService,
        },
        state::AppState,
        util::validate::required,
    },
};

pub static FORM_TAG: &str = "form";

/// Builds the response body of a create or edit turn.
///
/// `completed_status` is the status code used once the form has been written.
fn conversation_response(
    outcome: ConversationOutcome<Form>,
    completed_status: StatusCode,
) -> (StatusCode, Json<FormConversationDto>) {
    match outcome {
        ConversationOutcome::InProgress(reply) => (
            StatusCode::OK,
            Json(FormConversationDto {
                status: ConversationStatus::InProgress,
                reply: Some(reply),
                form: None,
            }),
        ),
        ConversationOutcome::Completed(form) => (
            completed_status,
            Json(FormConversationDto {
                status: ConversationStatus::Completed,
                reply: None,
                form: Some(form.into_dto()),
            }),
        ),
    }
}

/// Advances a form-creation conversation.
///
/// Replies 201 with the new form once the agent signals completion, otherwise 200 with
/// the agent's reply.
#[utoipa::path(
    post,
    path = "/create-form",
    tag = FORM_TAG,
    request_body = CreateFormDto,
    responses(
        (status = 201, description = "Conversation completed, form created", body = FormConversationDto),
        (status = 200, description = "Conversation in progress", body = FormConversationDto),
        (status = 400, description = "Missing field or conversation too short", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Agent not configured or unreachable", body = ErrorDto)
    ),
)]
pub async fn create_form(
    State(state): State<AppState>,
    Json(payload): Json<CreateFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFormConversationParam {
        conversation: Conversation::from_dto(required(payload.messages, "messages")?),
        author_id: required(payload.user_id, "userId")?,
    };

    let agents = FormAgentClient::new(&state.http_client, &state.form_agents);
    let outcome = FormConversationService::new(&state.db, agents).create(param).await?;

    Ok(conversation_response(outcome, StatusCode::CREATED))
}

/// Advances a form-editing conversation, replacing the form's fields on completion.
#[utoipa::path(
    post,
    path = "/edit-form",
    tag = FORM_TAG,
    request_body = FormConversationRequestDto,
    responses(
        (status = 200, description = "Conversation in progress, or completed with the updated form", body = FormConversationDto),
        (status = 400, description = "Missing field or conversation too short", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Agent not configured or unreachable", body = ErrorDto)
    ),
)]
pub async fn edit_form(
    State(state): State<AppState>,
    Json(payload): Json<FormConversationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = FormConversationParam {
        conversation: Conversation::from_dto(required(payload.messages, "messages")?),
        form_id: required(payload.form_id, "formId")?,
    };

    let agents = FormAgentClient::new(&state.http_client, &state.form_agents);
    let outcome = FormConversationService::new(&state.db, agents).edit(param).await?;

    Ok(conversation_response(outcome, StatusCode::OK))
}

/// Asks the analysis agent a question about a form and its submissions.
#[utoipa::path(
    post,
    path = "/analyze-form",
    tag = FORM_TAG,
    request_body = AnalyzeFormDto,
    responses(
        (status = 200, description = "Analysis result", body = AnalysisDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Agent not configured or unreachable", body = ErrorDto)
    ),
)]
pub async fn analyze_form(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = AnalyzeFormParam {
        form_id: required(payload.form_id, "formId")?,
        query: required(payload.query, "query")?,
    };

    let agents = FormAgentClient::new(&state.http_client, &state.form_agents);
    let analysis = FormConversationService::new(&state.db, agents).analyze(param).await?;

    Ok((StatusCode::OK, Json(AnalysisDto { analysis })))
}

#[utoipa::path(
    post,
    path = "/fetch-forms",
    tag = FORM_TAG,
    request_body = UserIdDto,
    responses(
        (status = 200, description = "Forms authored by the user, newest first", body = Vec<FormDto>),
        (status = 400, description = "Missing userId", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fetch_forms(
    State(state): State<AppState>,
    Json(payload): Json<UserIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = required(payload.user_id, "userId")?;

    let forms = FormService::new(&state.db).get_by_author(user_id).await?;

    let forms_dto: Vec<FormDto> = forms.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(forms_dto)))
}

#[utoipa::path(
    post,
    path = "/form",
    tag = FORM_TAG,
    request_body = FormIdDto,
    responses(
        (status = 200, description = "The form", body = FormDto),
        (status = 400, description = "Missing formId", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_form(
    State(state): State<AppState>,
    Json(payload): Json<FormIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let form_id = required(payload.form_id, "formId")?;

    let form = FormService::new(&state.db).get_by_id(form_id).await?;

    Ok((StatusCode::OK, Json(form.into_dto())))
}

/// Deletes a form and all of its submissions.
#[utoipa::path(
    post,
    path = "/delete-form",
    tag = FORM_TAG,
    request_body = FormIdDto,
    responses(
        (status = 200, description = "Form deleted", body = DeletedFormDto),
        (status = 400, description = "Missing formId", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_form(
    State(state): State<AppState>,
    Json(payload): Json<FormIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let form_id = required(payload.form_id, "formId")?;

    let deleted = FormService::new(&state.db).delete(form_id).await?;

    Ok((StatusCode::OK, Json(DeletedFormDto { deleted })))
}
