//! Tests for FamilyBuilder and KinshipService using the family fixtures

use std::path::Path;

use rstest::rstest;

use kinship::application::services::KinshipService;
use kinship::application::ApplicationError;
use kinship::config::Settings;
use kinship::domain::{DomainError, DuplicatePolicy, FamilyFile, TreeNodeConvert};

fn service(duplicates: DuplicatePolicy) -> KinshipService {
    KinshipService::new(Settings {
        duplicates,
        ..Settings::default()
    })
}

#[rstest]
fn given_scenario_file_when_loading_then_all_branches_applied() {
    let family = service(DuplicatePolicy::Reject)
        .load_family(Some(Path::new("tests/resources/families/scenario.toml")))
        .unwrap();

    assert_eq!(family.len(), 17);
    assert_eq!(family.children_of("a").unwrap(), vec!["b", "c"]);
    let rendered = family.to_tree_string().to_string();
    assert!(rendered.starts_with("a\n"));
    assert_eq!(rendered.lines().count(), 17);
}

#[rstest]
fn given_duplicate_name_when_rejecting_then_load_fails() {
    let err = service(DuplicatePolicy::Reject)
        .load_family(Some(Path::new("tests/resources/families/duplicate.toml")))
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::DuplicateMember(ref name)) if name == "b"
    ));
}

#[rstest]
fn given_duplicate_name_when_replacing_then_last_branch_wins() {
    let family = service(DuplicatePolicy::Replace)
        .load_family(Some(Path::new("tests/resources/families/duplicate.toml")))
        .unwrap();
    assert_eq!(family.parent_of("b").unwrap(), Some("c"));
    assert_eq!(family.lineage("b").unwrap(), vec!["b", "c", "a"]);
    assert_eq!(family.cousin_classification("b", "a").unwrap().degree_removed, 2);
}

#[rstest]
fn given_branch_with_unknown_parent_when_loading_then_unknown_member() {
    let err = service(DuplicatePolicy::Reject)
        .load_family(Some(Path::new("tests/resources/families/orphan.toml")))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        DomainError::UnknownMember("z".into()).to_string()
    );
}

#[rstest]
fn given_unknown_field_when_loading_then_invalid_family_file() {
    let err = service(DuplicatePolicy::Reject)
        .load_family(Some(Path::new("tests/resources/families/malformed.toml")))
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidFamilyFile { .. })
    ));
}

#[rstest]
fn given_family_file_when_parsing_then_keeps_branch_order() {
    let content = std::fs::read_to_string("tests/resources/families/scenario.toml").unwrap();
    let file = FamilyFile::parse(&content).unwrap();
    assert_eq!(file.founder, "a");
    let parents: Vec<&str> = file.branches.iter().map(|b| b.parent.as_str()).collect();
    assert_eq!(parents, vec!["a", "b", "c", "d", "e", "f", "g"]);
}
