use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RoteDto {
    pub id: i32,
    pub name: String,
    pub tradition: String,
    pub description: String,
    pub spheres: String,
    pub level: i32,
    pub page: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Rote submission. Fields are optional so that a missing field is reported as a
/// validation failure rather than a deserialization failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateRoteDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tradition: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub spheres: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub page: Option<String>,
}
