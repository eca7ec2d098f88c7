use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        rote::{CreateRoteDto, RoteDto},
    },
    server::{
        error::AppError,
        model::rote::{CreateRoteParams, RoteFilter},
        service::rote::RoteService,
        state::AppState,
    },
};

/// Tag for grouping rote endpoints in OpenAPI documentation
pub static ROTE_TAG: &str = "rote";

#[derive(Deserialize, Default)]
pub struct RoteQuery {
    pub tradition: Option<String>,
    pub sphere: Option<String>,
}

impl RoteQuery {
    /// Empty query values such as `?tradition=` mean "no filter".
    fn into_filter(self) -> RoteFilter {
        RoteFilter {
            tradition: self.tradition.filter(|t| !t.is_empty()),
            sphere: self.sphere.filter(|s| !s.is_empty()),
        }
    }
}

/// List rotes.
///
/// Returns every rote ordered by name, optionally narrowed by tradition or by a sphere
/// mentioned in the rote's sphere requirements.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `tradition` and `sphere` filters
///
/// # Returns
/// - `200 OK` - List of rotes
/// - `400 Bad Request` - Query string doesn't parse
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rotes",
    tag = ROTE_TAG,
    params(
        ("tradition" = Option<String>, Query, description = "Only rotes of this tradition"),
        ("sphere" = Option<String>, Query, description = "Only rotes whose spheres mention this sphere")
    ),
    responses(
        (status = 200, description = "Successfully retrieved rotes", body = Vec<RoteDto>),
        (status = 400, description = "Invalid query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rotes(
    State(state): State<AppState>,
    query: Result<Query<RoteQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let service = RoteService::new(&state.db);

    let rotes = service.list(query.into_filter()).await?;

    let rotes: Vec<RoteDto> = rotes.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rotes)))
}

/// Create a rote.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Rote data; `name`, `tradition`, `description`, `spheres` and `level` are required
///
/// # Returns
/// - `201 Created` - The created rote
/// - `400 Bad Request` - A required field is missing
/// - `500 Internal Server Error` - Malformed body or database error
#[utoipa::path(
    post,
    path = "/api/rotes",
    tag = ROTE_TAG,
    request_body = CreateRoteDto,
    responses(
        (status = 201, description = "Successfully created rote", body = RoteDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rote(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateRoteParams::from_dto(payload)?;

    let rote = RoteService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(rote.into_dto())))
}
