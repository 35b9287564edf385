#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;

pub fn lit(dir: &TempDir, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("lit").expect("Failed to find lit binary");
    cmd.current_dir(dir.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).expect("Failed to write workspace file");
}

pub fn read_file(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).expect("Failed to read workspace file")
}

/// Current HEAD hash straight from the HEAD record
pub fn head(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join(".lit").join("HEAD"))
        .expect("HEAD record missing")
        .trim()
        .to_string()
}

pub fn random_content() -> String {
    Words(5..10).fake::<Vec<String>>().join(" ")
}
