use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_config_found_from_subdirectory() {
    let project = TestProject::celery().unwrap();
    let nested = project.project_path().join("celery").join("app");
    std::fs::create_dir_all(&nested).unwrap();

    project
        .distreq()
        .current_dir(&nested)
        .args(["requirements", "extras/redis.txt"])
        .assert()
        .success()
        .stdout("redis>=4.5.2,<6.0.0,!=4.5.5\n");
}

#[test]
fn test_explicit_config_path() {
    let project = TestProject::celery().unwrap();
    let elsewhere = tempfile::TempDir::new().unwrap();

    project
        .distreq()
        .current_dir(elsewhere.path())
        .arg("--config")
        .arg(project.project_path().join("distreq.toml"))
        .arg("requirements")
        .assert()
        .success()
        .stdout(predicate::str::contains("vine>=5.1.0,<6.0"));
}

#[test]
fn test_missing_config() {
    let project = TestProject::new().unwrap();

    project
        .distreq()
        .arg("--config")
        .arg(project.project_path().join("nope.toml"))
        .arg("metadata")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("distreq.toml not found"))
        .stderr(predicate::str::contains("distreq init"));
}

#[test]
fn test_duplicate_extra_rejected() {
    let project = TestProject::celery().unwrap();
    project
        .write_config("[package]\nname = \"celery\"\n[extras]\nnames = [\"redis\", \"redis\"]\n")
        .unwrap();

    project
        .distreq()
        .arg("extras")
        .assert()
        .failure()
        .stderr(predicate::str::contains("declared more than once"));
}

#[test]
fn test_unknown_config_key_rejected() {
    let project = TestProject::celery().unwrap();
    project.write_config("[package]\nname = \"celery\"\nversion = \"1\"\n").unwrap();

    project
        .distreq()
        .arg("metadata")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file syntax"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::celery().unwrap();

    let value = {
        let output = project
            .distreq()
            .args(["--verbose", "requirements", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("expanding requirement file"));
        serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
    };
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn test_extra_name_whitespace_is_ignored() {
    let project = TestProject::celery().unwrap();
    project.write_config("[package]\nname = \"celery\"\n[extras]\nnames = [\" redis \"]\n").unwrap();

    project
        .distreq()
        .args(["extras", "redis"])
        .assert()
        .success()
        .stdout("redis\n  redis>=4.5.2,<6.0.0,!=4.5.5\n");
}
