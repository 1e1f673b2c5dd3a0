//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod kinship;

pub use kinship::KinshipService;
