// ABOUTME: Container runtime selection and invocation for Podman and Docker.
// ABOUTME: Detects the runtime on PATH and runs its CLI as child processes.

mod detection;
mod error;
mod invocation;
mod runner;
mod types;

pub use detection::{detect_local, select_runtime, select_runtime_from_env};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use invocation::{ChildStatus, Invocation};
pub use runner::{CommandRunner, DryRunRunner, ProcessRunner};
pub use types::{RuntimeConfig, RuntimeType};
