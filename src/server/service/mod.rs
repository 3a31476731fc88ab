//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! work with domain models, turn missing rows into `AppError::NotFound`, and let database
//! failures surface as `AppError::StorageUnavailable`.

pub mod slide;

#[cfg(test)]
mod test;
