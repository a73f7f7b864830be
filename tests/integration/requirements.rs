use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_default_requirements() {
    let project = TestProject::celery().unwrap();

    project
        .distreq()
        .arg("requirements")
        .assert()
        .success()
        .stdout("billiard>=4.2.0,<5.0\nkombu>=5.3.4,<6.0\nvine>=5.1.0,<6.0\n");
}

#[test]
fn test_nested_includes_as_json() {
    let project = TestProject::celery().unwrap();

    let value = project.json(&["requirements", "test.txt", "--format", "json"]);
    assert_eq!(
        value,
        serde_json::json!(["pytest>=7.4.4", "billiard>=4.2.0,<5.0", "kombu>=5.3.4,<6.0", "vine>=5.1.0,<6.0"])
    );
}

#[test]
fn test_diamond_include_keeps_duplicates() {
    let project = TestProject::celery().unwrap();
    project.write_requirement("both.txt", "-r extras/sqs.txt\n-r default.txt\n").unwrap();

    let value = project.json(&["requirements", "both.txt", "--format", "json"]);
    let kombu = value.as_array().unwrap().iter().filter(|r| *r == "kombu>=5.3.4,<6.0").count();
    assert_eq!(kombu, 2);
}

#[test]
fn test_include_cycle_fails() {
    let project = TestProject::celery().unwrap();
    project.write_requirement("a.txt", "six\n-r b.txt\n").unwrap();
    project.write_requirement("b.txt", "-r a.txt\n").unwrap();

    project
        .distreq()
        .args(["requirements", "a.txt"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Circular requirement include detected: a.txt -> b.txt -> a.txt"));
}

#[test]
fn test_missing_included_file_fails() {
    let project = TestProject::celery().unwrap();
    project.write_requirement("broken.txt", "six\n-r extras/gone.txt\n").unwrap();

    project
        .distreq()
        .args(["requirements", "broken.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("gone.txt"));
}
