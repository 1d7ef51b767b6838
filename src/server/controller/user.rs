use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDto, UserIdDto},
    },
    server::{
        error::AppError, service::user::UserService, state::AppState, util::validate::required,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    post,
    path = "/user-details",
    tag = USER_TAG,
    request_body = UserIdDto,
    responses(
        (status = 200, description = "Account details", body = UserDto),
        (status = 400, description = "Missing userId", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_details(
    State(state): State<AppState>,
    Json(payload): Json<UserIdDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = required(payload.user_id, "userId")?;

    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
