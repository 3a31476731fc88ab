use crate::server::{
    error::AppError,
    model::slide::{ListMode, PLACEHOLDER_SLIDE_COUNT, SENTINEL_PAYLOAD},
    service::slide::SlideService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
