use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        conversation::ConversationStatus,
        form::{FormConversationRequestDto, FormIdDto},
        submission::{SubmissionConversationDto, SubmissionDto},
    },
    server::{
        error::AppError,
        model::{
            conversation::{Conversation, ConversationOutcome},
            form::FormConversationParam,
        },
        service::{
            form_agent::FormAgentClient, form_conversation::FormConversationService,
            submission::SubmissionService,
        },
        state::AppState,
        util::validate::required,
    },
};

pub static SUBMISSION_TAG: &str = "submission";

/// Advances a form-filling conversation.
///
/// Replies 201 with the stored submission once the agent signals completion, otherwise
/// 200 with the agent's reply.
#[utoipa::path(
    post,
    path = "/fill-form",
    tag = SUBMISSION_TAG,
    request_body = FormConversationRequestDto,
    responses(
        (status = 201, description = "Conversation completed, submission stored", body = SubmissionConversationDto),
        (status = 200, description = "Conversation in progress", body = SubmissionConversationDto),
        (status = 400, description = "Missing field or conversation too short", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Agent not configured or unreachable", body = ErrorDto)
    ),
)]
pub async fn fill_form(
    State(state): State<AppState>,
    Json(payload): Json<FormConversationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = FormConversationParam {
        conversation: Conversation::from_dto(required(payload.messages, "messages")?),
        form_id: required(payload.form_id, "formId")?,
    };

    let agents = FormAgentClient::new(&state.http_client, &state.form_agents);
    let outcome = FormConversationService::new(&state.db, agents).fill(param).await?;

    let response = match outcome {
        ConversationOutcome::InProgress(reply) => (
            StatusCode::OK,
            Json(SubmissionConversationDto {
                status: ConversationStatus::InProgress,
                reply: Some(reply),
                submission: None,
            }),
        ),
        ConversationOutcome::Completed(submission) => (
            StatusCode::CREATED,
            Json(SubmissionConversationDto {
                status: ConversationStatus::Completed,
                reply: None,
                submission: Some(submission.into_dto()),
            }),
        ),
    };

    Ok(response)
}

#[utoipa::path(
    post,
    path = "/fetch-submissions",
    tag = SUBMISSION_TAG,
    request_body = FormIdDto,
    responses(
        (status = 200, description = "Submissions of the form, oldest first", body = Vec<SubmissionDto>),
        (status = 400, description = "Missing formId", body = ErrorDto),
        (status = 404, description = "Form not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fetch_submissions(
    State(state): State<AppState>,
    Json(payload): Json<FormIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let form_id = required(payload.form_id, "formId")?;

    let submissions = SubmissionService::new(&state.db)
        .get_by_form(form_id)
        .await?;

    let submissions_dto: Vec<SubmissionDto> =
        submissions.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(submissions_dto)))
}
