//! Runs the compiled `crazyeights` binary with piped stdin and an isolated
//! environment, capturing its exit code and both output streams.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    workdir: tempfile::TempDir,
}

/// Variables the binary reads; cleared for every run unless set explicitly.
const CONFIG_VARS: &[&str] = &[
    "CRAZYEIGHTS_CONFIG",
    "CRAZYEIGHTS_SEED",
    "CRAZYEIGHTS_PLAYERS",
    "CRAZYEIGHTS_NAME",
    "CRAZYEIGHTS_LOG",
];

impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_crazyeights")),
            workdir: tempfile::tempdir().expect("temp workdir"),
        }
    }

    pub fn workdir(&self) -> &std::path::Path {
        self.workdir.path()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], "")
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], input)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, "")
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.workdir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for key in CONFIG_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn CLI binary");
        if let Some(mut stdin) = child.stdin.take() {
            use std::io::Write as _;
            // The game may stop reading early; a broken pipe here is fine.
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().expect("failed to read output");

        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
