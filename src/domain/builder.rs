//! Family builder: turns a flat list of (parent, children) records into a tree.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::family::{DuplicatePolicy, FamilyTree};

/// On-disk family definition.
///
/// ```toml
/// founder = "a"
///
/// [[branch]]
/// parent = "a"
/// children = ["b", "c"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FamilyFile {
    pub founder: String,
    #[serde(default, rename = "branch")]
    pub branches: Vec<Branch>,
}

/// One child group attached to an existing member.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Branch {
    pub parent: String,
    pub children: Vec<String>,
}

impl FamilyFile {
    pub fn parse(content: &str) -> DomainResult<Self> {
        toml::from_str(content).map_err(|e| DomainError::InvalidFamilyFile {
            message: e.to_string(),
        })
    }
}

/// Constructs family trees from [`FamilyFile`] definitions.
#[derive(Debug, Default)]
pub struct FamilyBuilder {
    duplicates: DuplicatePolicy,
}

impl FamilyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Parse TOML content and build the tree it describes.
    pub fn build_from_str(&self, content: &str) -> DomainResult<FamilyTree> {
        let file = FamilyFile::parse(content)?;
        self.build(&file)
    }

    /// Applies branches in file order; a branch's parent must already exist.
    #[instrument(level = "debug", skip(self, file), fields(founder = %file.founder))]
    pub fn build(&self, file: &FamilyFile) -> DomainResult<FamilyTree> {
        if file.founder.trim().is_empty() {
            return Err(DomainError::InvalidFamilyFile {
                message: "founder name is empty".to_string(),
            });
        }
        let mut tree = FamilyTree::with_policy(file.founder.clone(), self.duplicates);
        for branch in &file.branches {
            tree.register_children(&branch.parent, branch.children.as_slice())?;
        }
        debug!("built family of {} members", tree.len());
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
founder = "a"

[[branch]]
parent = "a"
children = ["b", "c"]

[[branch]]
parent = "b"
children = ["d"]
"#;

    #[test]
    fn given_valid_toml_when_building_then_tree_has_all_members() {
        let tree = FamilyBuilder::new().build_from_str(SMALL).unwrap();
        assert_eq!(tree.names(), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn given_branch_before_its_parent_when_building_then_unknown_member() {
        let content = r#"
founder = "a"

[[branch]]
parent = "b"
children = ["d"]

[[branch]]
parent = "a"
children = ["b"]
"#;
        let err = FamilyBuilder::new().build_from_str(content).unwrap_err();
        assert_eq!(err, DomainError::UnknownMember("b".into()));
    }

    #[test]
    fn given_malformed_toml_when_parsing_then_invalid_family_file() {
        let err = FamilyFile::parse("founder = ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidFamilyFile { .. }));
    }

    #[test]
    fn given_empty_founder_when_building_then_rejected() {
        let err = FamilyBuilder::new()
            .build_from_str("founder = \"  \"")
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidFamilyFile { .. }));
    }

    #[test]
    fn given_replace_policy_when_building_duplicates_then_succeeds() {
        let content = r#"
founder = "a"

[[branch]]
parent = "a"
children = ["b", "b"]
"#;
        assert!(FamilyBuilder::new().build_from_str(content).is_err());
        let tree = FamilyBuilder::new()
            .duplicates(DuplicatePolicy::Replace)
            .build_from_str(content)
            .unwrap();
        assert_eq!(tree.len(), 3);
    }
}
