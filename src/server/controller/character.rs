use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::character::CreateCharacterParams,
        service::character::CharacterService, state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// List the signed-in user's characters, newest first.
///
/// # Access Control
/// - Signed-in user; only their own characters are returned
///
/// # Returns
/// - `200 OK` - The user's characters
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let characters = CharacterService::new(&state.db)
        .list_for_user(user.id)
        .await?;

    let characters: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(characters)))
}

/// Create a character owned by the signed-in user.
///
/// # Access Control
/// - Signed-in user
///
/// # Returns
/// - `201 Created` - The created character
/// - `400 Bad Request` - `name` or `tradition` missing
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - Malformed body or database error
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let Json(payload) = payload?;

    let params = CreateCharacterParams::from_dto(user.id, payload)?;

    let character = CharacterService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// Delete one of the signed-in user's characters.
///
/// # Access Control
/// - Signed-in user; characters owned by someone else are reported as not found
///
/// # Returns
/// - `204 No Content` - Character deleted
/// - `400 Bad Request` - ID is not a number
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - No such character owned by the user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 400, description = "Invalid character ID", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let Path(id) = id?;

    CharacterService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
