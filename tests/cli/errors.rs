//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("pwbox") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout(&output, contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_short_master_password_rejected() {
    let t = Test::new();

    let output = t.cmd_with_master("short").arg("list").output().unwrap();
    assert_failure(&output);
    assert_stderr(&output, contains("master password too short"));
    assert!(!t.store_path().exists());
}

#[test]
fn test_wrong_master_password_leaves_box_untouched() {
    let (t, _) = Test::with_records(&[("mail", "alice@example.com", "hunter22")]);
    let before = std::fs::read(t.store_path()).unwrap();

    let output = t
        .cmd_with_master("not the right one")
        .args(["list", "--show"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout(&output, contains("alice@example.com").not());
    assert_stdout(&output, contains("hunter22").not());
    assert_eq!(std::fs::read(t.store_path()).unwrap(), before);
}

#[test]
fn test_mistyped_master_password_does_not_lock_out_owner() {
    let (t, ids) = Test::with_records(&[("pin", "a", "1")]);

    let output = t
        .cmd_with_master("correct horse batterz")
        .args(["add", "-c", "mail", "-a", "alice@example.com", "-p", "a long password"])
        .output()
        .unwrap();
    assert_success(&output);
    let stray = printed_ids(&output);

    let output = t.list();
    assert_success(&output);
    assert_stdout(&output, contains(&ids[0]));
    assert_stdout(&output, contains(&stray[0]));

    let output = t.rm(&[stray[0].as_str()]);
    assert_success(&output);

    let output = t.list();
    assert_success(&output);
    assert_stdout(&output, contains(&ids[0]));
    assert_stdout(&output, contains(&stray[0]).not());
}

#[test]
fn test_corrupt_box_reports_json_error() {
    let t = Test::new();
    std::fs::create_dir_all(t.store_path().parent().unwrap()).unwrap();
    std::fs::write(t.store_path(), "{not json").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr(&output, contains("json error"));
}

#[test]
fn test_rm_without_arguments_fails() {
    let t = Test::new();

    let output = t.cmd().arg("rm").output().unwrap();
    assert_failure(&output);
}
