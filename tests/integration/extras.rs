use indexmap::IndexMap;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_all_extras_in_declaration_order() {
    let project = TestProject::celery().unwrap();

    let value: IndexMap<String, Vec<String>> = project.json_as(&["extras", "--format", "json"]);
    let names: Vec<&str> = value.keys().map(String::as_str).collect();

    assert_eq!(names, vec!["redis", "sqs", "custom"]);
    assert_eq!(value["sqs"], vec!["boto3>=1.26.143", "kombu>=5.3.4,<6.0"]);
    assert!(value["custom"].is_empty());
}

#[test]
fn test_selection_order_follows_arguments() {
    let project = TestProject::celery().unwrap();

    let value: IndexMap<String, Vec<String>> =
        project.json_as(&["extras", "custom", "sqs", "redis", "--format", "json"]);
    assert_eq!(value.keys().collect::<Vec<_>>(), vec!["custom", "sqs", "redis"]);
}

#[test]
fn test_selected_extras_text() {
    let project = TestProject::celery().unwrap();

    project
        .distreq()
        .args(["extras", "sqs"])
        .assert()
        .success()
        .stdout("sqs\n  boto3>=1.26.143\n  kombu>=5.3.4,<6.0\n");
}

#[test]
fn test_unknown_extra_fails() {
    let project = TestProject::celery().unwrap();

    project
        .distreq()
        .args(["extras", "zstd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Extra 'zstd' is not declared"));
}

#[test]
fn test_missing_extra_file_fails_everything() {
    let project = TestProject::celery().unwrap();
    project
        .write_config("[package]\nname = \"celery\"\n[extras]\nnames = [\"redis\", \"yaml\"]\n")
        .unwrap();

    project
        .distreq()
        .args(["extras", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("yaml.txt"));
}
