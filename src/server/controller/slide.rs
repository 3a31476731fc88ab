use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, slide::SlideDto},
    server::{error::AppError, service::slide::SlideService, state::AppState},
};

/// Tag for grouping slide endpoints in OpenAPI documentation
pub static SLIDE_TAG: &str = "slide";

const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";
const OCTET_STREAM: &str = "application/octet-stream";

/// Get the payload of a slide.
///
/// Returns the stored payload byte for byte. The payload is usually JSON written by the
/// front-end and is then served as plain text without being parsed; payloads that are
/// not UTF-8 are served as `application/octet-stream`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Slide ID from the path
///
/// # Returns
/// - `200 OK` - Raw slide payload
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No slide with that ID
/// - `500 Internal Server Error` - Storage unavailable
#[utoipa::path(
    get,
    path = "/api/slide/{id}",
    tag = SLIDE_TAG,
    params(
        ("id" = i32, Path, description = "Slide ID")
    ),
    responses(
        (status = 200, description = "Raw slide payload, byte for byte", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed slide ID", body = ErrorDto),
        (status = 404, description = "Slide not found", body = ErrorDto),
        (status = 500, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn get_slide(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = slide_id(id)?;

    let data = SlideService::new(&state.db).get(id).await?;

    let content_type = match std::str::from_utf8(&data) {
        Ok(_) => TEXT_PLAIN_UTF_8,
        Err(_) => OCTET_STREAM,
    };

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], data))
}

/// Replace the payload of a slide.
///
/// The request body is buffered in full before storage is touched and becomes the new
/// payload as-is, whatever bytes it contains; nothing is merged with the previous payload.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Slide ID from the path
/// - `body` - New payload
///
/// # Returns
/// - `204 No Content` - Payload replaced
/// - `400 Bad Request` - ID is not an integer, or the body could not be read in full
/// - `404 Not Found` - No slide with that ID
/// - `500 Internal Server Error` - Storage unavailable
#[utoipa::path(
    post,
    path = "/api/slide/{id}",
    tag = SLIDE_TAG,
    params(
        ("id" = i32, Path, description = "Slide ID")
    ),
    request_body(content = String, description = "New slide payload", content_type = "text/plain"),
    responses(
        (status = 204, description = "Slide payload replaced"),
        (status = 400, description = "Malformed slide ID or unreadable body", body = ErrorDto),
        (status = 404, description = "Slide not found", body = ErrorDto),
        (status = 500, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn update_slide(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = slide_id(id)?;

    let body = body.map_err(|e| {
        AppError::BadRequest(format!("Failed to read request body: {}", e.body_text()))
    })?;

    SlideService::new(&state.db).update(id, body.to_vec()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a new slide.
///
/// The slide starts out with the `[]` payload. The ID is chosen by the database and
/// returned as decimal text.
///
/// # Returns
/// - `200 OK` - ID of the new slide
/// - `500 Internal Server Error` - Storage unavailable
#[utoipa::path(
    put,
    path = "/api/slide",
    tag = SLIDE_TAG,
    responses(
        (status = 200, description = "ID of the created slide", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn create_slide(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let id = SlideService::new(&state.db).create().await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_PLAIN_UTF_8)],
        id.to_string(),
    ))
}

/// List slides.
///
/// Depending on `SLIDE_LIST_MODE` this is either a fixed list of empty placeholder
/// records or every stored slide in ID order.
#[utoipa::path(
    get,
    path = "/api/allslides",
    tag = SLIDE_TAG,
    responses(
        (status = 200, description = "Slide records", body = Vec<SlideDto>),
        (status = 500, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn get_all_slides(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let slides = SlideService::new(&state.db)
        .list_all(state.list_mode)
        .await?;

    let dto: Vec<SlideDto> = slides.into_iter().map(|slide| slide.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

fn slide_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::BadRequest(format!("Invalid slide ID: {}", e.body_text())))
}
