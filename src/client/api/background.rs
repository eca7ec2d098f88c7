use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::background::{BackgroundDto, CreateBackgroundDto},
};

pub async fn get_backgrounds() -> Result<Vec<BackgroundDto>, ApiError> {
    let response = send_request(get("/api/backgrounds")).await?;
    parse_response(response).await
}

pub async fn create_background(payload: CreateBackgroundDto) -> Result<BackgroundDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/backgrounds").body(body)).await?;
    parse_response(response).await
}
