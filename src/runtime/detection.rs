// ABOUTME: Runtime detection by scanning the executable search path.
// ABOUTME: Looks for Podman in every PATH directory first, then Docker.

use super::types::{RuntimeConfig, RuntimeType};
use std::ffi::OsStr;
use std::path::Path;

/// Select the runtime for this process.
///
/// An explicit override in `config` wins. Otherwise the search path is
/// scanned with [`detect_local`].
pub fn select_runtime(config: &RuntimeConfig, search_path: Option<&OsStr>) -> Option<RuntimeType> {
    if let Some(runtime) = config.runtime {
        tracing::debug!("using runtime override: {}", runtime);
        return Some(runtime);
    }

    let Some(search_path) = search_path else {
        tracing::debug!("PATH is not set, no runtime can be detected");
        return None;
    };

    let detected = detect_local(search_path);
    match detected {
        Some(runtime) => tracing::debug!("detected {} on PATH", runtime),
        None => tracing::debug!("neither podman nor docker found on PATH"),
    }
    detected
}

/// Select the runtime using the current process's `PATH`.
pub fn select_runtime_from_env(config: &RuntimeConfig) -> Option<RuntimeType> {
    let search_path = std::env::var_os("PATH");
    select_runtime(config, search_path.as_deref())
}

/// Detect a container runtime on a colon-delimited search path.
///
/// Detection order:
/// 1. `podman` in any directory of the path
/// 2. `docker` in any directory of the path
///
/// Each name gets a full pass over the path, so a `docker` early in the path
/// never shadows a `podman` later in it. Empty entries are skipped.
pub fn detect_local(search_path: &OsStr) -> Option<RuntimeType> {
    let dirs: Vec<_> = std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect();

    RuntimeType::PREFERENCE
        .into_iter()
        .find(|runtime| dirs.iter().any(|dir| has_binary(dir, *runtime)))
}

fn has_binary(dir: &Path, runtime: RuntimeType) -> bool {
    dir.join(runtime.binary_name()).is_file()
}
