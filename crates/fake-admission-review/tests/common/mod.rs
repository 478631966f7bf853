use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;

#[allow(dead_code)]
pub fn setup_command() -> Command {
    let mut cmd: Command = cargo_bin_cmd!("fake-admission-review");

    cmd.env_remove("FAKE_ADMISSION_REVIEW_FILE")
        .env_remove("FAKE_ADMISSION_REVIEW_LOG_LEVEL")
        .env_remove("FAKE_ADMISSION_REVIEW_LOG_FMT");

    cmd
}

#[allow(dead_code)]
pub fn test_data(path: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(path)
        .to_string_lossy()
        .to_string()
}
