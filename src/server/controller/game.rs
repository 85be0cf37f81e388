use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDto, PaginatedGamesDto},
        user::UserDto,
    },
    server::{
        error::{AppError, RESOURCE_NOT_FOUND},
        service::game::GameService,
        state::AppState,
        util::parse::parse_i64_or,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PER_PAGE: i64 = 10;

/// Raw pagination query parameters.
///
/// Kept as strings so malformed values fall back to their defaults instead of
/// rejecting the request.
#[derive(Deserialize, Default)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

fn game_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Game with id {} not found", id))
}

fn game_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(RESOURCE_NOT_FOUND.to_string()))
}

/// Get a paginated list of games.
///
/// Pagination is lenient: missing or malformed parameters take their defaults and
/// pages past the end return an empty list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and per_page)
///
/// # Returns
/// - `200 OK` - Games on the page with page, pages and total
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    params(
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<i64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved games", body = PaginatedGamesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();

    let page = parse_i64_or(params.page.as_deref(), DEFAULT_PAGE);
    let per_page = parse_i64_or(params.per_page.as_deref(), DEFAULT_PER_PAGE);

    let service = GameService::new(&state.db);
    let games = service.get_paginated(page, per_page).await?;

    Ok((StatusCode::OK, Json(games.into_dto())))
}

/// Get a game by ID with its reviews.
///
/// Each review includes the user who wrote it. Reviews are listed in the order they
/// were created.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `path` - Game ID
///
/// # Returns
/// - `200 OK` - Game with nested reviews
/// - `404 Not Found` - No game with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i64, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_by_id(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = game_id(path)?;

    let service = GameService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(game) => Ok((StatusCode::OK, Json(game.into_dto()))),
        None => Err(game_not_found(id)),
    }
}

/// Get the users who reviewed a game.
///
/// One entry is returned per review, in review order. Users are serialized without
/// their reviews.
///
/// # Returns
/// - `200 OK` - Reviewers of the game
/// - `404 Not Found` - No game with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/{id}/users",
    tag = GAME_TAG,
    params(
        ("id" = i64, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviewers", body = Vec<UserDto>),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_users(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = game_id(path)?;

    let service = GameService::new(&state.db);

    match service.get_reviewers(id).await? {
        Some(users) => {
            let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();
            Ok((StatusCode::OK, Json(users_dto)))
        }
        None => Err(game_not_found(id)),
    }
}
