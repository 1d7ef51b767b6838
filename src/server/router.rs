use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, form, submission, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AutoForms API",
        description = "Conversational form creation, filling and analysis"
    ),
    tags(
        (name = "auth", description = "Account signup and login"),
        (name = "user", description = "Account lookups"),
        (name = "form", description = "Form conversations and management"),
        (name = "submission", description = "Form filling and submissions")
    )
)]
struct ApiDoc;

/// Builds the application router with API docs, CORS and shared state attached.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::signup))
        .routes(routes!(auth::login))
        .routes(routes!(user::get_user_details))
        .routes(routes!(form::create_form))
        .routes(routes!(form::edit_form))
        .routes(routes!(form::analyze_form))
        .routes(routes!(form::fetch_forms))
        .routes(routes!(form::get_form))
        .routes(routes!(form::delete_form))
        .routes(routes!(submission::fill_form))
        .routes(routes!(submission::fetch_submissions))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .route("/", get(greeting))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn greeting() -> &'static str {
    "Hello, World!"
}
