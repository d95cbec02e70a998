// ABOUTME: Runtime type definitions for Podman and Docker.
// ABOUTME: Includes the RuntimeType enum and the explicit override config.

use serde::{Deserialize, Serialize};

/// The container runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl RuntimeType {
    /// Detection order: Podman is preferred, Docker is the fallback.
    pub const PREFERENCE: [RuntimeType; 2] = [RuntimeType::Podman, RuntimeType::Docker];

    /// Name of the executable looked up on `PATH` and spawned.
    pub fn binary_name(&self) -> &'static str {
        match self {
            RuntimeType::Docker => "docker",
            RuntimeType::Podman => "podman",
        }
    }
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Configuration for explicit runtime override.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeConfig {
    /// Explicit runtime type (overrides `PATH` detection).
    pub runtime: Option<RuntimeType>,
}
