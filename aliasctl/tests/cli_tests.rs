//! End-to-end tests running the aliasctl binary against a temporary database.

use std::path::Path;
use std::process::{Command, Output};

fn aliasctl(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aliasctl"))
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("failed to run aliasctl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn listed_rows(db: &Path, args: &[&str]) -> Vec<Vec<String>> {
    let mut full = vec!["list"];
    full.extend_from_slice(args);
    let output = aliasctl(db, &full);
    assert!(output.status.success());
    stdout(&output)
        .lines()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

#[test]
fn add_disable_list_del_round() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("state").join("aliases.db");

    let added = aliasctl(&db, &["add", " Foo@Bar.COM ", "alice"]);
    assert!(added.status.success());
    assert!(added.stdout.is_empty());
    assert!(db.exists());

    assert!(aliasctl(&db, &["add", "z@x.com", "bob"]).status.success());
    assert!(aliasctl(&db, &["disable", "Z@X.com"]).status.success());

    let rows = listed_rows(&db, &[]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][..3], ["foo@bar.com", "alice", "enabled"]);
    assert_eq!(rows[1][..3], ["z@x.com", "bob", "disabled"]);
    assert!(rows[0][3].parse::<i64>().is_ok());

    let bob = listed_rows(&db, &["--user", "bob"]);
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0][0], "z@x.com");

    assert!(aliasctl(&db, &["del", "foo@bar.com"]).status.success());
    assert!(aliasctl(&db, &["del", "foo@bar.com"]).status.success());
    assert_eq!(listed_rows(&db, &[]).len(), 1);
}

#[test]
fn readd_reenables_and_reassigns() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("aliases.db");

    aliasctl(&db, &["add", "a@b.com", "alice"]);
    aliasctl(&db, &["disable", "a@b.com"]);
    aliasctl(&db, &["add", "A@B.com", "bob"]);

    let rows = listed_rows(&db, &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][..3], ["a@b.com", "bob", "enabled"]);

    let owner = aliasctl(&db, &["owner", "a@b.com"]);
    assert!(owner.status.success());
    assert_eq!(stdout(&owner), "bob\n");
}

#[test]
fn list_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("aliases.db");

    aliasctl(&db, &["add", "a@b.com", "alice"]);

    let output = aliasctl(&db, &["list", "--json"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["alias_email"], "a@b.com");
    assert_eq!(rows[0]["username"], "alice");
    assert_eq!(rows[0]["enabled"], true);
}

#[test]
fn argument_errors_exit_nonzero_without_touching_store() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("aliases.db");

    let missing = aliasctl(&db, &["add", "only@one.com"]);
    assert_eq!(missing.status.code(), Some(2));
    assert!(!missing.stderr.is_empty());

    let unknown = aliasctl(&db, &["frobnicate"]);
    assert_eq!(unknown.status.code(), Some(2));

    assert!(!db.exists());
}

#[test]
fn storage_errors_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let output = aliasctl(&blocker.join("aliases.db"), &["list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}
