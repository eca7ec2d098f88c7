use crate::server::{data::background::BackgroundRepository, model::background::CreateBackgroundParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
