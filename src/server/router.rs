use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        auth::{self, AUTH_TAG},
        background::{self, BACKGROUND_TAG},
        character::{self, CHARACTER_TAG},
        resource::{self, RESOURCE_TAG},
        rote::{self, ROTE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Grimoire API", description = "Rote, background and resource catalogue"),
    tags(
        (name = ROTE_TAG, description = "Rote catalogue"),
        (name = BACKGROUND_TAG, description = "Background catalogue"),
        (name = RESOURCE_TAG, description = "Resource links"),
        (name = ADMIN_TAG, description = "Password-gated catalogue maintenance"),
        (name = AUTH_TAG, description = "Account sign-up and session sign-in"),
        (name = CHARACTER_TAG, description = "Characters owned by the signed-in user")
    )
)]
struct ApiDoc;

/// Builds the API router and mounts the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(rote::get_rotes, rote::create_rote))
        .routes(routes!(
            background::get_backgrounds,
            background::create_background
        ))
        .routes(routes!(resource::get_resources, resource::create_resource))
        .routes(routes!(admin::authenticate))
        .routes(routes!(admin::delete_all))
        .routes(routes!(admin::seed))
        .routes(routes!(auth::sign_up))
        .routes(routes!(auth::sign_in))
        .routes(routes!(auth::sign_out))
        .routes(routes!(auth::get_user))
        .routes(routes!(
            character::get_characters,
            character::create_character
        ))
        .routes(routes!(character::delete_character))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
