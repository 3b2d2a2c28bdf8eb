//! Test driver for the getopt runner binaries.
//!
//! Builds `tgetopt` and `tgetopt_long` once per test process, runs them with
//! piped stdout/stderr, and hands back the captured output.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Once;

static BUILD_INIT: Once = Once::new();

/// Output captured from a finished runner.
#[derive(Debug)]
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    pub fn stderr_lines(&self) -> Vec<&str> {
        self.stderr.lines().collect()
    }
}

/// Build the runner binaries if not already done.
pub fn ensure_binaries() {
    BUILD_INIT.call_once(|| {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        let workspace_root = format!("{manifest_dir}/..");
        let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".into());
        let status = Command::new(cargo)
            .args(["build", "-p", "getopt", "--bins"])
            .current_dir(&workspace_root)
            .status()
            .expect("failed to run cargo build");
        assert!(status.success(), "cargo build -p getopt failed");
    });
}

/// The profile directory holding the binaries: the test executable lives in
/// `<target>/<profile>/deps/`.
fn target_dir() -> PathBuf {
    let exe = std::env::current_exe().expect("no current exe");
    let deps = exe.parent().expect("test exe has no parent");
    match deps.parent() {
        Some(profile) if deps.ends_with("deps") => profile.to_path_buf(),
        _ => deps.to_path_buf(),
    }
}

pub fn binary(name: &str) -> PathBuf {
    target_dir().join(format!("{name}{}", std::env::consts::EXE_SUFFIX))
}

/// Run runner `name` with `args` and wait for it.
pub fn run(name: &str, args: &[&str]) -> RunOutput {
    ensure_binaries();
    let path = binary(name);
    let output = Command::new(&path)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap_or_else(|e| panic!("failed to run {}: {e}", path.display()));
    RunOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Run `name` and assert a zero exit code.
pub fn run_ok(name: &str, args: &[&str]) -> RunOutput {
    let out = run(name, args);
    assert_eq!(
        out.code, 0,
        "{name} {args:?} exited with {}\nstdout:\n{}\nstderr:\n{}",
        out.code, out.stdout, out.stderr
    );
    out
}
