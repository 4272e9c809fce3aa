//! HTTP adapter: handlers, DTOs, validation, and the error envelope.

pub mod dto;
pub mod error;
pub mod projects;
pub mod state;
pub mod tasks;
pub(crate) mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApiError, ApiResult};
