use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, SignupDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParam, SignupParam},
        service::auth::AuthService,
        state::AppState,
        util::validate::required,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Registers a new account.
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Missing field or username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SignupParam {
        username: required(payload.username, "username")?,
        password: required(payload.password, "password")?,
        fullname: payload.fullname,
    };

    let user = AuthService::new(&state.db, state.bcrypt_cost)
        .signup(param)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Checks credentials and returns the stored account.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = UserDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Wrong password", body = ErrorDto),
        (status = 404, description = "Unknown username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam {
        username: required(payload.username, "username")?,
        password: required(payload.password, "password")?,
    };

    let user = AuthService::new(&state.db, state.bcrypt_cost)
        .login(param)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
