use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        resource::{CreateResourceDto, ResourceDto},
    },
    server::{
        error::AppError, model::resource::CreateResourceParams,
        service::resource::ResourceService, state::AppState,
    },
};

/// Tag for grouping resource endpoints in OpenAPI documentation
pub static RESOURCE_TAG: &str = "resource";

/// List resources.
///
/// Featured resources come first, the rest follow ordered by type and then name.
#[utoipa::path(
    get,
    path = "/api/resources",
    tag = RESOURCE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved resources", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resources(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let resources = ResourceService::new(&state.db).list().await?;

    let resources: Vec<ResourceDto> = resources.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(resources)))
}

/// Create a resource link.
///
/// # Returns
/// - `201 Created` - The created resource
/// - `400 Bad Request` - `name`, `type`, `category`, `description` or `url` missing
/// - `500 Internal Server Error` - Malformed body or database error
#[utoipa::path(
    post,
    path = "/api/resources",
    tag = RESOURCE_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Successfully created resource", body = ResourceDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_resource(
    State(state): State<AppState>,
    payload: Result<Json<CreateResourceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateResourceParams::from_dto(payload)?;

    let resource = ResourceService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(resource.into_dto())))
}
