use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{game, review},
    error::{AppError, RESOURCE_NOT_FOUND},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Game Reviews API",
    description = "Browse games, their reviews and reviewers, and post new reviews."
))]
struct ApiDoc;

/// Builds the API router.
///
/// The OpenAPI document collected from the handler annotations is served at
/// `/api-docs/openapi.json`. Requests that match no route get a JSON 404.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(game::get_games))
        .routes(routes!(game::get_game_by_id))
        .routes(routes!(game::get_game_users))
        .routes(routes!(review::create_review))
        .split_for_parts();

    router
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(api) }),
        )
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound(RESOURCE_NOT_FOUND.to_string())
}
