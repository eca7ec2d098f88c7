use crate::{
    client::{
        api::helper::{delete, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::admin::{AdminActionDto, AdminAuthDto, AdminPasswordDto},
};

fn password_body(password: String) -> Result<String, ApiError> {
    serialize_json(&AdminPasswordDto {
        password: Some(password),
    })
}

pub async fn authenticate(password: String) -> Result<AdminAuthDto, ApiError> {
    let body = password_body(password)?;
    let response = send_request(post("/api/admin/auth").body(body)).await?;
    parse_response(response).await
}

pub async fn seed(password: String) -> Result<AdminActionDto, ApiError> {
    let body = password_body(password)?;
    let response = send_request(post("/api/admin/seed").body(body)).await?;
    parse_response(response).await
}

pub async fn delete_all(password: String) -> Result<AdminActionDto, ApiError> {
    let body = password_body(password)?;
    let response = send_request(delete("/api/admin/delete-all").body(body)).await?;
    parse_response(response).await
}
