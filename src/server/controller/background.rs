use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        background::{BackgroundDto, CreateBackgroundDto},
    },
    server::{
        error::AppError, model::background::CreateBackgroundParams,
        service::background::BackgroundService, state::AppState,
    },
};

/// Tag for grouping background endpoints in OpenAPI documentation
pub static BACKGROUND_TAG: &str = "background";

/// List backgrounds ordered by category, then name.
#[utoipa::path(
    get,
    path = "/api/backgrounds",
    tag = BACKGROUND_TAG,
    responses(
        (status = 200, description = "Successfully retrieved backgrounds", body = Vec<BackgroundDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_backgrounds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let backgrounds = BackgroundService::new(&state.db).list().await?;

    let backgrounds: Vec<BackgroundDto> = backgrounds.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(backgrounds)))
}

/// Create a background.
///
/// # Returns
/// - `201 Created` - The created background
/// - `400 Bad Request` - `name`, `category`, `subtype`, `cost` or `description` missing
/// - `500 Internal Server Error` - Malformed body or database error
#[utoipa::path(
    post,
    path = "/api/backgrounds",
    tag = BACKGROUND_TAG,
    request_body = CreateBackgroundDto,
    responses(
        (status = 201, description = "Successfully created background", body = BackgroundDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_background(
    State(state): State<AppState>,
    payload: Result<Json<CreateBackgroundDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateBackgroundParams::from_dto(payload)?;

    let background = BackgroundService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(background.into_dto())))
}
