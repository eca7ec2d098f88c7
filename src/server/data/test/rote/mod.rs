use crate::server::{
    data::rote::RoteRepository,
    model::rote::{CreateRoteParams, RoteFilter},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_many;
mod delete_all;
mod get_all;

fn params(name: &str) -> CreateRoteParams {
    CreateRoteParams {
        name: name.to_string(),
        tradition: "Verbena".to_string(),
        description: "A test rote".to_string(),
        spheres: "Life 2".to_string(),
        level: 2,
        page: None,
    }
}
