use std::io::Write;
use std::process::{Command, Output};

pub fn run_topts(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_topts"))
        .args(args)
        .output()
        .expect("failed to run topts")
}

pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("topts failed: {stderr}");
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a config file the `-config` option can point at.
pub fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}
