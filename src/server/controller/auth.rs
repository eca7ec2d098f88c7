use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{SignInDto, SignUpDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::{SignInParams, SignUpParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account and sign it in.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session the new user ID is stored in
/// - `payload` - `username`, `email` and a `password` of at least 8 characters
///
/// # Returns
/// - `201 Created` - The new user, now signed in
/// - `400 Bad Request` - Missing field, short password, or "User already exists"
/// - `500 Internal Server Error` - Malformed body, hashing or database error
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid sign-up data or user already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SignUpDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = SignUpParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).sign_up(params).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign in with a username and password.
///
/// # Returns
/// - `200 OK` - The signed-in user
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - "Invalid username or password"
/// - `500 Internal Server Error` - Malformed body or database error
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SignInDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = SignInParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).sign_in(params).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Sign out by clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/signout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed-in user.
///
/// Anonymous sessions get `null` rather than an error so the client can render its
/// signed-out state without special handling.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The signed-in user, or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthSession::new(&session).get_user_id().await?;

    let user = AuthService::new(&state.db).current_user(user_id).await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}
