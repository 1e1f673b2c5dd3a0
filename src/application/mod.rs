//! Application layer: services and use cases
//!
//! This layer loads family definitions and runs kinship queries on them.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
