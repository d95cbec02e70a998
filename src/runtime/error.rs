// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Covers a missing runtime, spawn failures, and failed child processes.

use snafu::Snafu;

/// Error raised while selecting or invoking the container runtime.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    #[snafu(display("no container runtime found on PATH (looked for podman, then docker)"))]
    NotFound,

    #[snafu(display("failed to launch `{program}`: {source}"))]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[snafu(display("`{command}` {}", describe_exit(*code)))]
    Exited { command: String, code: Option<i32> },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Neither podman nor docker is on the search path.
    NotFound,
    /// The runtime binary could not be started.
    SpawnFailed,
    /// The runtime ran and reported failure.
    ChildFailed,
}

impl RuntimeError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::NotFound => RuntimeErrorKind::NotFound,
            RuntimeError::Spawn { .. } => RuntimeErrorKind::SpawnFailed,
            RuntimeError::Exited { .. } => RuntimeErrorKind::ChildFailed,
        }
    }

    /// Process exit code to report for this error.
    ///
    /// A failed child's own code is passed through.
    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::NotFound => 127,
            RuntimeError::Spawn { .. } => 126,
            RuntimeError::Exited {
                code: Some(code), ..
            } if *code != 0 => *code,
            RuntimeError::Exited { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exited_passes_child_code_through() {
        let err = RuntimeError::Exited {
            command: "podman stop web".to_string(),
            code: Some(125),
        };
        assert_eq!(err.exit_code(), 125);
        assert_eq!(err.kind(), RuntimeErrorKind::ChildFailed);
        assert_eq!(err.to_string(), "`podman stop web` exited with code 125");
    }

    #[test]
    fn signalled_child_reports_one() {
        let err = RuntimeError::Exited {
            command: "docker exec -t a ping b".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("terminated by a signal"));
    }

    #[test]
    fn not_found_uses_127() {
        assert_eq!(RuntimeError::NotFound.exit_code(), 127);
        assert_eq!(RuntimeError::NotFound.kind(), RuntimeErrorKind::NotFound);
    }

    #[test]
    fn spawn_failure_names_program() {
        let err = RuntimeError::Spawn {
            program: "docker".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.kind(), RuntimeErrorKind::SpawnFailed);
        assert_eq!(err.exit_code(), 126);
        assert!(err.to_string().starts_with("failed to launch `docker`"));
    }
}
