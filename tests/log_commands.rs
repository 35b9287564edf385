mod common;

use predicates::prelude::predicate;

#[test]
fn log_with_no_commits_reports_empty_history() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::lit(&dir, &["init"]).assert().success();

    common::lit(&dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commits yet."));

    Ok(())
}

#[test]
fn log_shows_commits_oldest_first() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::lit(&dir, &["init"]).assert().success();

    common::write_file(&dir, "a.txt", "hello");
    common::lit(&dir, &["add", "a.txt"]).assert().success();
    common::lit(&dir, &["commit", "first", "alice"]).assert().success();

    common::write_file(&dir, "a.txt", "world");
    common::lit(&dir, &["add", "a.txt"]).assert().success();
    common::lit(&dir, &["commit", "second", "alice"]).assert().success();

    let output = common::lit(&dir, &["log"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let first_at = stdout.find("first").expect("first commit in log");
    let second_at = stdout.find("second").expect("second commit in log");
    assert!(first_at < second_at);

    Ok(())
}

#[test]
fn log_entry_has_medium_format_structure() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::lit(&dir, &["init"]).assert().success();

    common::write_file(&dir, "a.txt", "hello");
    common::lit(&dir, &["add", "a.txt"]).assert().success();
    common::lit(&dir, &["commit", "first", "alice"]).assert().success();

    common::lit(&dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"commit [0-9a-f]{40}\n")?)
        .stdout(predicate::str::contains("Author: alice"))
        .stdout(predicate::str::is_match(r"Date:   \w{3} \w{3} \d")?)
        .stdout(predicate::str::contains("    first"));

    Ok(())
}
