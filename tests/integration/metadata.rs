use indexmap::IndexMap;
use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_metadata_text() {
    let project = TestProject::celery().unwrap();

    project
        .distreq()
        .arg("metadata")
        .assert()
        .success()
        .stdout(predicate::str::contains("version = 5.3.1"))
        .stdout(predicate::str::contains("doc = Distributed Task Queue."))
        .stdout(predicate::str::contains("0.0.0").not());
}

#[test]
fn test_metadata_json_keeps_header_order() {
    let project = TestProject::celery().unwrap();

    let value: IndexMap<String, String> = project.json_as(&["metadata", "--format", "json"]);
    let keys: Vec<&str> = value.keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        vec!["doc", "version", "author", "contact", "homepage", "docformat", "keywords"]
    );
    assert_eq!(value["homepage"], "https://docs.celeryq.dev/");
}

#[test]
fn test_custom_header_and_sentinel() {
    let project = TestProject::new().unwrap();
    project
        .write_config(
            "[package]\nname = \"kombu\"\nheader = \"src/kombu/__init__.py\"\nsentinel = \"# end\"\n",
        )
        .unwrap();
    project
        .write_file("src/kombu/__init__.py", "__version__ = \"5.3.4\"\n# end\n__author__ = 'late'\n")
        .unwrap();

    let value = project.json(&["metadata", "--format", "json"]);
    assert_eq!(value, serde_json::json!({ "version": "5.3.4" }));
}

#[test]
fn test_missing_header_fails() {
    let project = TestProject::new().unwrap();
    project.write_config("[package]\nname = \"ghost\"\n").unwrap();

    project
        .distreq()
        .arg("metadata")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("__init__.py"));
}
