use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_init_then_requirements() {
    let project = TestProject::new().unwrap();

    project
        .distreq()
        .args(["init", "--name", "billiard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(project.project_path().join("distreq.toml").exists());

    project.write_requirement("default.txt", "six\n").unwrap();
    project.distreq().arg("requirements").assert().success().stdout("six\n");
}

#[test]
fn test_init_defaults_to_directory_name() {
    let project = TestProject::new().unwrap();
    project.distreq().arg("init").assert().success();

    let content = std::fs::read_to_string(project.project_path().join("distreq.toml")).unwrap();
    assert!(content.contains("name = \"project\""));
}

#[test]
fn test_init_refuses_existing_config() {
    let project = TestProject::celery().unwrap();

    project
        .distreq()
        .args(["init", "--name", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    project.distreq().args(["init", "--name", "other", "--force"]).assert().success();
    let content = std::fs::read_to_string(project.project_path().join("distreq.toml")).unwrap();
    assert!(content.contains("name = \"other\""));
}
