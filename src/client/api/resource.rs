use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::resource::ResourceDto,
};

pub async fn get_resources() -> Result<Vec<ResourceDto>, ApiError> {
    let response = send_request(get("/api/resources")).await?;
    parse_response(response).await
}
