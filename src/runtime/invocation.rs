// ABOUTME: A single external process call as an explicit list of tokens.
// ABOUTME: Includes the exit status reported back by a runner.

use serde::Serialize;
use std::fmt;

/// One call to an external program.
///
/// Arguments are kept as discrete tokens and handed to the process spawner
/// as-is, so nothing is ever re-split or re-quoted by a shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildStatus {
    code: Option<i32>,
}

impl ChildStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Child was terminated without an exit code (e.g. by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for ChildStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_start_with_program() {
        let inv = Invocation::new("podman").args(["pull", "alpine:latest"]);
        assert_eq!(inv.tokens(), vec!["podman", "pull", "alpine:latest"]);
        assert_eq!(inv.program(), "podman");
        assert_eq!(inv.arguments(), ["pull", "alpine:latest"]);
    }

    #[test]
    fn tokens_with_spaces_are_not_split() {
        let inv = Invocation::new("docker").arg("inspect").arg("my container");
        assert_eq!(inv.arguments().len(), 2);
        assert_eq!(inv.arguments()[1], "my container");
    }

    #[test]
    fn display_joins_tokens() {
        let inv = Invocation::new("docker").args(["network", "ls"]);
        assert_eq!(inv.to_string(), "docker network ls");
    }

    #[test]
    fn status_success_only_on_zero() {
        assert!(ChildStatus::from_code(0).success());
        assert!(!ChildStatus::from_code(125).success());
        assert!(!ChildStatus::terminated().success());
        assert_eq!(ChildStatus::terminated().code(), None);
    }
}
