// ABOUTME: Test support utilities.
// ABOUTME: Provides a recording runner and fake runtime binaries on a temp PATH.

use async_trait::async_trait;
use cntnr::runtime::{ChildStatus, CommandRunner, Invocation, RuntimeError};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Records every invocation instead of running it.
///
/// Any invocation containing the configured token exits with `fail_code`.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Vec<String>>>,
    fail_on: Option<(String, i32)>,
}

#[allow(dead_code)]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(token: &str, fail_code: i32) -> Self {
        Self {
            calls: Mutex::default(),
            fail_on: Some((token.to_string(), fail_code)),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ChildStatus, RuntimeError> {
        let tokens: Vec<String> = invocation.tokens().into_iter().map(String::from).collect();
        self.calls.lock().unwrap().push(tokens.clone());

        match &self.fail_on {
            Some((token, code)) if tokens.contains(token) => Ok(ChildStatus::from_code(*code)),
            _ => Ok(ChildStatus::from_code(0)),
        }
    }
}

/// Environment variable the fake runtimes read: an argument equal to its
/// value makes them exit 42.
#[allow(dead_code)]
pub const FAKE_FAIL_VAR: &str = "CNTNR_FAKE_FAIL";

/// A temp directory holding fake `podman`/`docker` scripts that append their
/// arguments to a shared log file.
#[allow(dead_code)]
pub struct FakeRuntimes {
    dir: TempDir,
    log: PathBuf,
}

#[allow(dead_code)]
impl FakeRuntimes {
    pub fn new(binaries: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("calls.log");
        for name in binaries {
            write_fake(dir.path(), name, &log);
        }
        Self { dir, log }
    }

    /// Value to use as `PATH` so only the fakes are visible.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Logged calls, one `program arg...` line each.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }
}

fn write_fake(dir: &Path, name: &str, log: &Path) {
    let script = format!(
        "#!/bin/sh\n\
         echo \"{name} $*\" >> \"{log}\"\n\
         for arg in \"$@\"; do\n\
         \x20 if [ \"$arg\" = \"${{{var}:-}}\" ]; then exit 42; fi\n\
         done\n\
         exit 0\n",
        log = log.display(),
        var = FAKE_FAIL_VAR,
    );
    let path = dir.join(name);
    fs::write(&path, script).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}
