#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

use crate::support::make_executable;

pub const USERS_SYNTAX: &str = "users/*\nusers/*/edit\nusers/list\n";

// Stand-in for a tool that answers `--syntax`. The script lives in its own
// temp dir and disappears with the fixture.
pub struct FakeTool {
    dir: TempDir,
    path: PathBuf,
}

impl FakeTool {
    /// Tool that prints a banner, the wrapped syntax data, and a trailer.
    pub fn with_syntax(name: &str, syntax: &str) -> Result<Self> {
        let body = format!(
            "echo 'Setting up framework'\n\
             cat <<'SYNTAX_EOF'\n\
             **START SYNTAX DATA**\n\
             {syntax}**END SYNTAX DATA**\n\
             SYNTAX_EOF\n\
             echo 'Finished'\n"
        );
        Self::with_script(name, &body)
    }

    /// Tool whose `--syntax` handler runs `body` verbatim.
    pub fn with_script(name: &str, body: &str) -> Result<Self> {
        let tool = Self::write_script(name, body)?;
        make_executable(&tool.path)?;
        Ok(tool)
    }

    /// Same script as `with_script`, left without the exec bit.
    pub fn without_exec_bit(name: &str, body: &str) -> Result<Self> {
        Self::write_script(name, body)
    }

    fn write_script(name: &str, body: &str) -> Result<Self> {
        let dir = TempDir::new().context("creating fake tool dir")?;
        let path = dir.path().join(name);
        let contents = format!(
            "#!/bin/sh\n\
             if [ \"$1\" != \"--syntax\" ]; then\n\
             \x20 echo \"unknown flag: $1\" >&2\n\
             \x20 exit 2\n\
             fi\n\
             {body}"
        );
        fs::write(&path, contents)
            .with_context(|| format!("failed to write fake tool at {}", path.display()))?;
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("not-installed")
    }
}

// Writing a script while another test thread forks can leave the file busy
// (ETXTBSY); tests hold this guard while installing and running fake tools.
pub struct ToolGuard {
    _guard: MutexGuard<'static, ()>,
}

pub fn tool_guard() -> ToolGuard {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let mutex = LOCK.get_or_init(|| Mutex::new(()));
    let guard = mutex.lock().unwrap_or_else(|err| err.into_inner());
    ToolGuard { _guard: guard }
}
