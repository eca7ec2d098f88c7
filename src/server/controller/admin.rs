use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{AdminActionDto, AdminAuthDto, AdminPasswordDto},
        api::ErrorDto,
    },
    server::{error::AppError, service::admin::AdminService, state::AppState},
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Check the admin password.
///
/// Used by the admin panel before it offers the seed and delete-all actions. No state is
/// kept server-side; every admin action sends the password again.
///
/// # Arguments
/// - `state` - Application state containing the admin secret
/// - `payload` - Body with the `password` to check
///
/// # Returns
/// - `200 OK` - `{"authenticated": true}`
/// - `400 Bad Request` - No password supplied
/// - `401 Unauthorized` - Wrong password
#[utoipa::path(
    post,
    path = "/api/admin/auth",
    tag = ADMIN_TAG,
    request_body = AdminPasswordDto,
    responses(
        (status = 200, description = "Password accepted", body = AdminAuthDto),
        (status = 400, description = "Password missing", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<AdminPasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    AdminService::new(&state.db, &state.admin_password)
        .verify_password(payload.password.as_deref())?;

    Ok((StatusCode::OK, Json(AdminAuthDto { authenticated: true })))
}

/// Delete every rote.
///
/// # Returns
/// - `200 OK` - Number of rotes deleted
/// - `400 Bad Request` - No password supplied
/// - `401 Unauthorized` - Wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/delete-all",
    tag = ADMIN_TAG,
    request_body = AdminPasswordDto,
    responses(
        (status = 200, description = "Rotes deleted", body = AdminActionDto),
        (status = 400, description = "Password missing", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_all(
    State(state): State<AppState>,
    payload: Result<Json<AdminPasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = AdminService::new(&state.db, &state.admin_password);
    service.verify_password(payload.password.as_deref())?;

    let count = service.delete_all().await?;

    Ok((
        StatusCode::OK,
        Json(AdminActionDto {
            message: format!("Deleted {} rotes", count),
            count,
        }),
    ))
}

/// Insert the sample rote set.
///
/// # Returns
/// - `200 OK` - Number of rotes inserted
/// - `400 Bad Request` - No password supplied
/// - `401 Unauthorized` - Wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/seed",
    tag = ADMIN_TAG,
    request_body = AdminPasswordDto,
    responses(
        (status = 200, description = "Sample rotes inserted", body = AdminActionDto),
        (status = 400, description = "Password missing", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed(
    State(state): State<AppState>,
    payload: Result<Json<AdminPasswordDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = AdminService::new(&state.db, &state.admin_password);
    service.verify_password(payload.password.as_deref())?;

    let count = service.seed().await?;

    Ok((
        StatusCode::OK,
        Json(AdminActionDto {
            message: format!("Seeded {} rotes", count),
            count,
        }),
    ))
}
