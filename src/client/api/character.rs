use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::character::{CharacterDto, CreateCharacterDto},
};

pub async fn get_characters() -> Result<Vec<CharacterDto>, ApiError> {
    let response = send_request(get("/api/characters")).await?;
    parse_response(response).await
}

pub async fn create_character(payload: CreateCharacterDto) -> Result<CharacterDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/characters").body(body)).await?;
    parse_response(response).await
}

pub async fn delete_character(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/characters/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
