//! Database repository layer.
//!
//! Repositories handle the database operations for each domain. They use SeaORM entity
//! models internally and return domain models so entity types never leak into the
//! service or controller layers.

pub mod slide;
