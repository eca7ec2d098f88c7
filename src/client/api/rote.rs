use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::rote::{CreateRoteDto, RoteDto},
};

/// Fetches rotes, optionally filtered by tradition and sphere.
pub async fn get_rotes(
    tradition: Option<String>,
    sphere: Option<String>,
) -> Result<Vec<RoteDto>, ApiError> {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(tradition) = tradition.filter(|t| !t.is_empty()) {
        query.append_pair("tradition", &tradition);
    }
    if let Some(sphere) = sphere.filter(|s| !s.is_empty()) {
        query.append_pair("sphere", &sphere);
    }
    let query = query.finish();

    let url = if query.is_empty() {
        "/api/rotes".to_string()
    } else {
        format!("/api/rotes?{}", query)
    };

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_rote(payload: CreateRoteDto) -> Result<RoteDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/rotes").body(body)).await?;
    parse_response(response).await
}
