//! Domain layer: family tree model and kinship algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod family;
pub mod kinship;
pub mod member;
pub mod tree_traits;

pub use builder::{Branch, FamilyBuilder, FamilyFile};
pub use error::{DomainError, DomainResult};
pub use family::{DuplicatePolicy, FamilyIter, FamilyTree};
pub use kinship::Kinship;
pub use member::Member;
pub use tree_traits::TreeNodeConvert;
