use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A slide record as listed by `GET /api/allslides`.
///
/// `data` is passed through exactly as stored; the server never parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlideDto {
    pub id: i32,
    pub data: String,
}
