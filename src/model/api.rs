use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body returned alongside every non-2xx API response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
