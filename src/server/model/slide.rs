//! Domain & parameter models for slide operations
//!
//! Defines the slide domain model, the payload every new slide starts with, and the
//! capability flag that decides how the slide listing is produced.

use std::{fmt, str::FromStr};

use crate::{model::slide::SlideDto, server::error::config::ConfigError};

/// Payload assigned to a slide when it is created, before any update.
pub const SENTINEL_PAYLOAD: &[u8] = b"[]";

/// Number of records returned by the placeholder listing.
pub const PLACEHOLDER_SLIDE_COUNT: usize = 2;

/// The slide domain model
///
/// A store-assigned identity plus an opaque payload. The payload is usually JSON
/// produced by the front-end but may be any byte sequence; it is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: i32,
    pub data: Vec<u8>,
}

impl Slide {
    /// Converts an entity model to the slide domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Slide` - The converted slide domain model
    pub fn from_entity(entity: entity::slides::Model) -> Self {
        Self {
            id: entity.id,
            data: entity.data,
        }
    }

    /// An unsaved slide with id `0` and an empty payload, as served by the
    /// placeholder listing.
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            data: Vec::new(),
        }
    }

    /// Converts the slide domain model into its DTO
    ///
    /// JSON strings cannot carry arbitrary bytes, so invalid UTF-8 sequences in the
    /// payload are replaced with U+FFFD in the listing.
    pub fn into_dto(self) -> SlideDto {
        SlideDto {
            id: self.id,
            data: String::from_utf8_lossy(&self.data).into_owned(),
        }
    }
}

/// How `GET /api/allslides` is answered.
///
/// The front-end only ever needed a fixed-size list to render its picker, so the default
/// never touches storage. `Persisted` enumerates every stored slide instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    /// Fixed set of empty placeholder records.
    #[default]
    Placeholder,
    /// Every stored slide, ascending by id.
    Persisted,
}

impl FromStr for ListMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(Self::Placeholder),
            "persisted" => Ok(Self::Persisted),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "SLIDE_LIST_MODE".to_string(),
                value: value.to_string(),
                reason: "expected `placeholder` or `persisted`".to_string(),
            }),
        }
    }
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => f.write_str("placeholder"),
            Self::Persisted => f.write_str("persisted"),
        }
    }
}
