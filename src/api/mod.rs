//! HTTP boundary exposing the task service over JSON.
//!
//! Routes are assembled in [`routes`]; request and response bodies live in
//! [`dto`] and every failure is rendered through [`ApiError`].

pub mod dto;
mod error;
mod handlers;
pub mod routes;

pub use error::{ApiError, ApiErrorCode};
pub use routes::{AppState, router, serve};
