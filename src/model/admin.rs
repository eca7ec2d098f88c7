use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Body accepted by every admin endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminPasswordDto {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminAuthDto {
    pub authenticated: bool,
}

/// Result of a bulk admin action such as seeding or deleting rotes.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminActionDto {
    pub message: String,
    pub count: u64,
}
