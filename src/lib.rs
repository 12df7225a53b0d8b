use anyhow::{Result, bail};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub mod catalog;
pub mod dump;
pub mod error;

pub use catalog::{CompiledMatcher, IndexSnapshot, PathCatalog, SyntaxIndex};
pub use dump::{CapturedDump, DEFAULT_SYNTAX_FLAG, DumpCommand, extract_region};
pub use error::{Marker, SyntaxError};

pub const ENV_APP: &str = "SYNTAX_INDEX_APP";
pub const ENV_SYNTAX_FLAG: &str = "SYNTAX_INDEX_FLAG";
pub const ENV_LOG: &str = "SYNTAX_INDEX_LOG";

/// Pick the executable whose syntax should be indexed.
///
/// An explicit path wins, then `SYNTAX_INDEX_APP`, then the build-time
/// `SYNTAX_INDEX_APP_HINT`. Existence is not checked here; `SyntaxIndex`
/// reports a missing executable itself.
pub fn resolve_app_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    pick_app_path(
        explicit,
        env_non_empty(ENV_APP),
        option_env!("SYNTAX_INDEX_APP_HINT"),
    )
}

/// Syntax flag to pass to the executable, honoring `SYNTAX_INDEX_FLAG`.
pub fn resolve_syntax_flag(explicit: Option<String>) -> OsString {
    explicit
        .filter(|flag| !flag.is_empty())
        .or_else(|| env_non_empty(ENV_SYNTAX_FLAG))
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_SYNTAX_FLAG))
}

fn pick_app_path(
    explicit: Option<PathBuf>,
    from_env: Option<String>,
    hint: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = from_env {
        return Ok(PathBuf::from(path));
    }
    if let Some(hint) = hint.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(hint));
    }
    bail!("No executable given. Pass --app or set {ENV_APP} to the tool whose syntax should be indexed.")
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
