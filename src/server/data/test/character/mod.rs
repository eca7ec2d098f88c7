use crate::server::{data::character::CharacterRepository, model::character::CreateCharacterParams};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_owned;
mod get_by_user;
