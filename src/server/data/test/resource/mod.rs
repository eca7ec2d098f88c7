use crate::server::{data::resource::ResourceRepository, model::resource::CreateResourceParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
