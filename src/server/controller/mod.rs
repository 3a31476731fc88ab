//! HTTP request handlers.
//!
//! Controllers extract arguments from requests, call into the service layer, and convert
//! domain models into DTOs. Errors are returned as `AppError` and mapped to status codes
//! by its `IntoResponse` implementation.

pub mod slide;
