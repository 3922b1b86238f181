//! Tests for add, update, list, find and clear.

use crate::support::*;

#[test]
fn test_add_prints_new_id() {
    let t = Test::new();

    let output = t.add("mail", "alice@example.com", "hunter22");
    assert_success(&output);
    assert_stderr(&output, contains("added"));

    let id = stdout(&output).trim().to_string();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(t.store_path().exists());
}

#[test]
fn test_add_reads_password_from_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["add", "-c", "mail", "-a", "alice"])
        .write_stdin("piped-secret\n")
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout(&t.list(), contains("piped-secret"));
}

#[test]
fn test_list_sorted_and_masked() {
    let (t, mut ids) = Test::with_records(STANDARD_RECORDS);
    ids.sort();

    let output = t.cmd().arg("list").output().unwrap();
    assert_success(&output);
    assert_stdout(&output, contains("ID"));
    assert_stdout(&output, contains("alice@example.com"));
    assert_stdout(&output, contains("hunter22").not());

    let listed: Vec<String> = stdout(&output)
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().next().unwrap().to_string())
        .collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_list_show_and_no_header() {
    let (t, _) = Test::with_records(STANDARD_RECORDS);

    let output = t
        .cmd()
        .args(["list", "--show", "--no-header"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout(&output, contains("hunter22"));
    assert_stdout(&output, contains("CATEGORY").not());
    assert_eq!(stdout(&output).lines().count(), STANDARD_RECORDS.len());
}

#[test]
fn test_list_json() {
    let (t, _) = Test::with_records(STANDARD_RECORDS);

    let output = t.list_json();
    assert_success(&output);

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), STANDARD_RECORDS.len());
    assert!(rows.iter().any(|r| r["password"] == "tr0ub4dor&3"));
}

#[test]
fn test_list_empty_box() {
    let t = Test::new();

    let output = t.list();
    assert_success(&output);
    assert_stdout(&output, contains("no passwords stored"));
}

#[test]
fn test_find_by_category_and_account() {
    let (t, _) = Test::with_records(STANDARD_RECORDS);

    let output = t.find("MAIL");
    assert_success(&output);
    assert_stdout(&output, contains("alice@example.com"));
    assert_stdout(&output, contains("bob@example.com"));
    assert_stdout(&output, contains("alice-checking").not());

    let output = t.find("alice");
    assert_success(&output);
    // header plus three alice records
    assert_eq!(stdout(&output).lines().count(), 4);

    let output = t.find("nobody");
    assert_success(&output);
    assert_stdout(&output, contains("nothing matches"));
}

#[test]
fn test_update_changes_only_given_fields() {
    let (t, ids) = Test::with_records(&[("mail", "alice", "old-pass")]);

    let output = t
        .cmd()
        .args(["update", ids[0].as_str(), "--password", "new-pass"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr(&output, contains("updated"));

    let output = t.list();
    assert_stdout(&output, contains("new-pass"));
    assert_stdout(&output, contains("alice"));
    assert_stdout(&output, contains("old-pass").not());
}

#[test]
fn test_update_unknown_id_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["update", "deadbeef", "--password", "x"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr(&output, contains("password not found: deadbeef"));
}

#[test]
fn test_clear_with_yes() {
    let (t, _) = Test::with_records(STANDARD_RECORDS);

    let output = t.cmd().args(["clear", "--yes"]).output().unwrap();
    assert_success(&output);
    assert_stderr(&output, contains("removed 4 password(s)"));

    assert_stdout(&t.list(), contains("no passwords stored"));
}

#[test]
fn test_store_flag_overrides_default_location() {
    let t = Test::new();
    let custom = t.home.path().join("elsewhere").join("box.json");

    let output = t
        .cmd()
        .args(["--store", custom.to_str().unwrap()])
        .args(["add", "-c", "mail", "-a", "alice", "-p", "pw"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(custom.exists());
    assert!(!t.store_path().exists());
}

#[test]
fn test_settings_file_store_path() {
    let t = Test::new();
    let dir = t.home.path().join(".pwbox");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[store]\npath = \"~/configured.json\"\n").unwrap();

    assert_success(&t.add("mail", "alice", "pw"));
    assert!(t.home.path().join("configured.json").exists());
}

#[test]
fn test_box_file_holds_no_plaintext() {
    let (t, _) = Test::with_records(STANDARD_RECORDS);

    let blob = std::fs::read_to_string(t.store_path()).unwrap();
    for (category, account, password) in STANDARD_RECORDS {
        assert!(blob.contains(category));
        assert!(!blob.contains(account));
        assert!(!blob.contains(password));
    }
}
