use predicates::prelude::*;

use crate::common::{CELERY_HEADER, TestProject};

#[test]
fn test_dist_json() {
    let project = TestProject::celery().unwrap();

    let value = project.json(&["dist", "--format", "json"]);

    assert_eq!(value["name"], "celery");
    assert_eq!(value["version"], "5.3.1");
    assert_eq!(value["description"], "Distributed Task Queue.");
    assert_eq!(value["keywords"], "task job queue distributed messaging actor");
    assert_eq!(value["author"], "Ask Solem");
    assert_eq!(value["author_email"], "auvipy@gmail.com");
    assert_eq!(value["url"], "https://docs.celeryq.dev/");
    assert_eq!(
        value["install_requires"],
        serde_json::json!(["billiard>=4.2.0,<5.0", "kombu>=5.3.4,<6.0", "vine>=5.1.0,<6.0"])
    );
    assert_eq!(value["tests_require"].as_array().unwrap().len(), 4);
    assert_eq!(value["extras_require"]["redis"], serde_json::json!(["redis>=4.5.2,<6.0.0,!=4.5.5"]));
}

#[test]
fn test_dist_text() {
    let project = TestProject::celery().unwrap();

    project
        .distreq()
        .arg("dist")
        .assert()
        .success()
        .stdout(predicate::str::contains("url: https://docs.celeryq.dev/"))
        .stdout(predicate::str::contains("extras_require[sqs]"));
}

#[test]
fn test_missing_homepage_fails() {
    let project = TestProject::celery().unwrap();
    let header: String = CELERY_HEADER
        .lines()
        .filter(|line| !line.starts_with("__homepage__"))
        .map(|line| format!("{line}\n"))
        .collect();
    project.write_file("celery/__init__.py", &header).unwrap();

    project
        .distreq()
        .args(["dist", "--format", "json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Metadata key 'homepage' not found"))
        .stderr(predicate::str::contains("suggestion:"));
}

#[test]
fn test_relaxed_required_keys() {
    let project = TestProject::celery().unwrap();
    project
        .write_config("[package]\nname = \"celery\"\n[metadata]\nrequired = [\"version\"]\n")
        .unwrap();
    project.write_file("celery/__init__.py", "__version__ = '1.0'\n").unwrap();

    // The distribution fields themselves are still looked up
    project
        .distreq()
        .arg("dist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Metadata key 'doc' not found"));
}

#[test]
fn test_test_requirements_default_to_test_txt() {
    let project = TestProject::celery().unwrap();
    project.write_config("[package]\nname = \"celery\"\n").unwrap();

    let value = project.json(&["dist", "--format", "json"]);
    assert_eq!(value["tests_require"][0], "pytest>=7.4.4");

    project.write_config("[package]\nname = \"celery\"\n[requirements]\ntests = \"\"\n").unwrap();
    let value = project.json(&["dist", "--format", "json"]);
    assert!(value.get("tests_require").is_none());
}
