use crate::server::{data::slide::SlideRepository, model::slide::SENTINEL_PAYLOAD};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod update_data;
