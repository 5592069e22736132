// tests/cli_test.rs
use predicates::prelude::*;
use std::fs;

mod common;
use common::{gt_cmd, TestRepo};

fn hash(oid: git2::Oid) -> String {
    oid.to_string()
}

#[test]
fn test_tag_increment_patch() {
    let mut test_repo = TestRepo::new();
    let first = test_repo.commit("first");
    test_repo.tag("v0.2.9", first);
    let head = test_repo.commit("fix: crash");

    gt_cmd(&test_repo)
        .args(["tag", "increment", "patch"])
        .assert()
        .success()
        .stdout(format!(
            "Increment tag component [patch] from v0.2.9 => v0.2.10 ({})\n",
            hash(head)
        ));

    assert_eq!(test_repo.tag_target("v0.2.10"), head);
}

#[test]
fn test_tag_increment_aliases() {
    let mut test_repo = TestRepo::new();
    let first = test_repo.commit("first");
    test_repo.tag("1.9.3", first);
    test_repo.commit("second");

    gt_cmd(&test_repo)
        .args(["t", "i", "maj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from 1.9.3 => 2.0.0"));
}

#[test]
fn test_tag_increment_refuses_tagged_head() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("first");
    test_repo.tag("v1.0.0", head);

    gt_cmd(&test_repo)
        .args(["tag", "increment", "minor"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR:"))
        .stderr(predicate::str::contains("v1.0.0"));

    assert_eq!(test_repo.tag_names(), vec!["v1.0.0"]);
}

#[test]
fn test_tag_increment_ignore_exists_tag() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("first");
    test_repo.tag("v1.0.0", head);

    gt_cmd(&test_repo)
        .args(["tag", "increment", "minor", "--ignore-exists-tag"])
        .assert()
        .success();

    assert_eq!(test_repo.tag_names(), vec!["v1.0.0", "v1.1.0"]);
    assert_eq!(test_repo.tag_target("v1.1.0"), head);
}

#[test]
fn test_tag_increment_without_tags_uses_configured_prefix() {
    let mut test_repo = TestRepo::new();
    test_repo.commit("first");
    let config = test_repo.path().join("custom.toml");
    fs::write(&config, "[tags]\ninitial_v_prefix = true\n").unwrap();

    gt_cmd(&test_repo)
        .arg("--config")
        .arg(&config)
        .args(["tag", "increment", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from v0.0.0 => v0.1.0"));

    assert_eq!(test_repo.tag_names(), vec!["v0.1.0"]);
}

#[test]
fn test_tag_last_formats() {
    let mut test_repo = TestRepo::new();
    let first = test_repo.commit("first");
    let second = test_repo.commit("second");
    test_repo.tag("v2.0.0-rc.1", first);
    test_repo.tag("v2.0.0", second);

    gt_cmd(&test_repo)
        .args(["tag", "last"])
        .assert()
        .success()
        .stdout(format!("v2.0.0 ({})\n", hash(second)));

    gt_cmd(&test_repo)
        .args(["tag", "last", "--format", "tag"])
        .assert()
        .success()
        .stdout("v2.0.0\n");
}

#[test]
fn test_tag_last_without_semver_tags() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("first");
    test_repo.tag("release", head);

    gt_cmd(&test_repo)
        .args(["tag", "last"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no semver tags"));
}

#[test]
fn test_lint_clean_repository() {
    let mut test_repo = TestRepo::new();
    let first = test_repo.commit("first");
    let second = test_repo.commit("second");
    test_repo.tag("v1.0.0", first);
    test_repo.tag("v1.0.1", second);

    gt_cmd(&test_repo)
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_lint_reports_anomalies() {
    let mut test_repo = TestRepo::new();
    let first = test_repo.commit("first");
    let second = test_repo.commit("second");
    test_repo.tag("v1.0.0", first);
    test_repo.tag("v1.1.0", second);
    test_repo.tag("1.2.0", second);

    gt_cmd(&test_repo)
        .arg("lint")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Tag `1.2.0` not in one style with others.",
        ))
        .stdout(predicate::str::contains(format!(
            "Commit `{}` has several semver tags: `v1.1.0, 1.2.0`.",
            hash(second)
        )));
}

#[test]
fn test_authors_table() {
    let mut test_repo = TestRepo::new();
    test_repo.commit_as("Ann", "ann@example.com", 1_000, 1_000);
    test_repo.commit_as("Bob", "bob@example.com", 2_000, 2_000);
    test_repo.commit_as("Ann", "ann@example.com", 3_000, 3_000);

    gt_cmd(&test_repo)
        .arg("authors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name | Email           | Commits"))
        .stdout(predicate::str::contains("Ann  | ann@example.com | 2"))
        .stdout(predicate::str::contains("Bob  | bob@example.com | 1"))
        .stdout(predicate::str::contains("Total authors: 2"));
}

#[test]
fn test_hooks_list() {
    let test_repo = TestRepo::new();

    gt_cmd(&test_repo)
        .args(["hooks", "list"])
        .assert()
        .success()
        .stdout("commit-msg\n");
}

#[test]
fn test_hooks_install_all() {
    let test_repo = TestRepo::new();
    let hook = test_repo.path().join(".git").join("hooks").join("commit-msg");
    fs::create_dir_all(hook.parent().unwrap()).unwrap();
    fs::write(&hook, "#!/bin/sh\necho custom\n").unwrap();

    gt_cmd(&test_repo)
        .args(["hooks", "install", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hook was installed"));

    let script = fs::read_to_string(&hook).unwrap();
    assert!(script.contains("## NOTE: Code-Generated"));
    assert!(script.contains("hooks exec commit-msg"));
    assert_eq!(
        fs::read_to_string(hook.with_file_name("commit-msg__backup")).unwrap(),
        "#!/bin/sh\necho custom\n"
    );
}

#[test]
fn test_hooks_exec_commit_msg() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("first");
    {
        let commit = test_repo.repo.find_commit(head).unwrap();
        test_repo.repo.branch("JIRA-12", &commit, false).unwrap();
        test_repo.repo.set_head("refs/heads/JIRA-12").unwrap();
    }
    let file = test_repo.path().join(".git").join("COMMIT_EDITMSG");
    fs::write(&file, "add login form\n").unwrap();

    gt_cmd(&test_repo)
        .args(["hooks", "exec", "commit-msg"])
        .arg(&file)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "JIRA-12 add login form\n");

    // second run leaves the message alone
    gt_cmd(&test_repo)
        .args(["hooks", "exec", "commit-msg"])
        .arg(&file)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "JIRA-12 add login form\n");
}

#[test]
fn test_repository_config_file_is_picked_up() {
    let mut test_repo = TestRepo::new();
    let head = test_repo.commit("first");
    {
        let commit = test_repo.repo.find_commit(head).unwrap();
        test_repo.repo.branch("feature-x", &commit, false).unwrap();
        test_repo.repo.set_head("refs/heads/feature-x").unwrap();
    }
    fs::write(
        test_repo.path().join("gittools.toml"),
        "[hooks.commit_msg]\ntemplate = \"[{branch}] {message}\"\n",
    )
    .unwrap();
    let file = test_repo.path().join(".git").join("COMMIT_EDITMSG");
    fs::write(&file, "tidy up\n").unwrap();

    gt_cmd(&test_repo)
        .args(["hooks", "exec", "commit-msg"])
        .arg(&file)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "[feature-x] tidy up\n");
}

#[test]
fn test_invalid_config_is_reported() {
    let mut test_repo = TestRepo::new();
    test_repo.commit("first");
    fs::write(test_repo.path().join("gittools.toml"), "[lint\nwindow = 3").unwrap();

    gt_cmd(&test_repo)
        .arg("lint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load configuration"));
}

#[test]
fn test_outside_repository() {
    let dir = tempfile::TempDir::new().unwrap();

    assert_cmd::Command::cargo_bin("gt")
        .unwrap()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["tag", "last"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open repository"));
}

#[test]
fn test_hooks_exec_commit_msg_on_first_commit() {
    let test_repo = TestRepo::new();
    test_repo.repo.set_head("refs/heads/JIRA-1").unwrap();
    let file = test_repo.path().join(".git").join("COMMIT_EDITMSG");
    fs::write(&file, "initial import\n").unwrap();

    gt_cmd(&test_repo)
        .args(["hooks", "exec", "commit-msg"])
        .arg(&file)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&file).unwrap(), "JIRA-1 initial import\n");
}
