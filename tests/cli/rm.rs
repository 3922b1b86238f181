//! Tests for rm.

use crate::support::*;

#[test]
fn test_rm_by_full_id() {
    let (t, ids) = Test::with_records(STANDARD_RECORDS);

    let output = t.rm(&[ids[0].as_str()]);
    assert_success(&output);
    assert_eq!(printed_ids(&output), vec![ids[0].clone()]);

    assert_stdout(&t.list(), contains(&ids[0]).not());
}

#[test]
fn test_rm_by_unique_prefix() {
    let (t, ids) = Test::with_records(&[("mail", "alice", "pw")]);

    let output = t.rm(&[&ids[0][..4]]);
    assert_success(&output);
    assert_eq!(printed_ids(&output), vec![ids[0].clone()]);
}

#[test]
fn test_rm_unknown_id_fails() {
    let (t, _) = Test::with_records(&[("mail", "alice", "pw")]);

    let output = t.rm(&["zzzz"]);
    assert_failure(&output);
    assert_stderr(&output, contains("password not found: zzzz"));
    assert_stderr(&output, contains("pwbox list"));

    assert_stdout(&t.list(), contains("alice"));
}

#[test]
fn test_rm_empty_prefix_is_ambiguous() {
    let (t, _) = Test::with_records(STANDARD_RECORDS);

    // The empty prefix matches every record.
    let output = t.rm(&[""]);
    assert_failure(&output);
    assert_stderr(&output, contains("ambiguous"));
    assert_stderr(&output, contains("--all"));

    let output = t.rm_all(&[""]);
    assert_success(&output);
    assert_eq!(printed_ids(&output).len(), STANDARD_RECORDS.len());
}

#[test]
fn test_rm_by_account() {
    let (t, ids) = Test::with_records(&[
        ("mail", "alice", "a"),
        ("mail", "alice", "b"),
        ("mail", "bob", "c"),
    ]);

    let output = t
        .cmd()
        .args(["rm", "-c", "mail", "-a", "bob"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(printed_ids(&output), vec![ids[2].clone()]);

    let output = t
        .cmd()
        .args(["rm", "-c", "mail", "-a", "alice"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr(&output, contains("ambiguous"));

    let output = t
        .cmd()
        .args(["rm", "-c", "mail", "-a", "alice", "--all"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(printed_ids(&output).len(), 2);
}

#[test]
fn test_rm_by_account_not_found() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["rm", "-c", "mail", "-a", "nobody"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr(&output, contains("no password with category 'mail' and account 'nobody'"));
}
