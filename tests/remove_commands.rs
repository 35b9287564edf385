mod common;

use predicates::prelude::*;

#[test]
fn removing_an_untracked_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::lit(&dir, &["init"]).assert().success();

    common::lit(&dir, &["remove", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file not tracked: a.txt"));

    Ok(())
}

#[test]
fn remove_unstages_without_deleting_the_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::lit(&dir, &["init"]).assert().success();

    common::write_file(&dir, "a.txt", "hello");
    common::lit(&dir, &["add", "a.txt"]).assert().success();

    common::lit(&dir, &["remove", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed a.txt from the staging index.",
        ));

    common::lit(&dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing staged for commit."));

    // the working-tree copy is untouched
    assert_eq!(common::read_file(&dir, "a.txt"), "hello");

    Ok(())
}

#[test]
fn remove_leaves_other_staged_files_alone() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::lit(&dir, &["init"]).assert().success();

    common::write_file(&dir, "a.txt", "hello");
    common::write_file(&dir, "b.txt", "world");
    common::lit(&dir, &["add", "a.txt"]).assert().success();
    common::lit(&dir, &["add", "b.txt"]).assert().success();

    common::lit(&dir, &["remove", "a.txt"]).assert().success();

    common::lit(&dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("a.txt").not());

    Ok(())
}
