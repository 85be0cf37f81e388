use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        model::review::{CreateReviewParam, MISSING_FIELDS_MESSAGE},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Create a review for a game.
///
/// Requires `game_id`, `user_id` and `score`; `comment` is optional. The score is
/// stored as given.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Review creation data
///
/// # Returns
/// - `201 Created` - The created review with its user
/// - `400 Bad Request` - Body is not a JSON object or a required field is missing
/// - `404 Not Found` - `game_id` or `user_id` does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "Invalid game_id or user_id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|err| {
        tracing::debug!("Rejected review payload: {}", err);
        AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let params = CreateReviewParam::from_dto(payload)?;

    let service = ReviewService::new(&state.db);
    let review = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}
