//! kinship: family trees and cousin classification.
//!
//! Layers:
//! - `domain`: family tree model, kinship algorithms, family file builder
//! - `application`: loading families according to settings
//! - `cli`: argument parsing, dispatch, terminal output
//!
//! ```
//! use kinship::domain::FamilyTree;
//!
//! let mut family = FamilyTree::new("a");
//! family.register_children("a", &["b", "c"]).unwrap();
//! family.register_children("b", &["d"]).unwrap();
//!
//! let kinship = family.cousin_classification("d", "c").unwrap();
//! assert_eq!(<(i32, u32)>::from(kinship), (0, 1));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{DomainError, FamilyTree, Kinship};
