use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{api::ErrorDto, slide::SlideDto},
    server::{
        controller::slide::{self, create_slide, get_all_slides, get_slide, update_slide},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        slide::get_slide,
        slide::update_slide,
        slide::create_slide,
        slide::get_all_slides,
    ),
    components(schemas(SlideDto, ErrorDto)),
    tags((name = "slide", description = "Slide storage and retrieval"))
)]
pub struct ApiDoc;

/// API routes.
///
/// `max_body_bytes` caps the size of a slide payload accepted by `POST /api/slide/{id}`.
pub fn router(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/api/slide", put(create_slide))
        .route("/api/slide/{id}", get(get_slide).post(update_slide))
        .route("/api/allslides", get(get_all_slides))
        .route("/api/openapi.json", get(openapi))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
