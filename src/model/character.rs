use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub tradition: String,
    pub concept: Option<String>,
    pub essence: Option<String>,
    pub nature: Option<String>,
    pub demeanor: Option<String>,
    pub arete: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateCharacterDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tradition: Option<String>,
    #[serde(default)]
    pub concept: Option<String>,
    #[serde(default)]
    pub essence: Option<String>,
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub demeanor: Option<String>,
    #[serde(default)]
    pub arete: Option<i32>,
}
