//! Indexed view of an executable's syntax dump.
//!
//! The index is built once: the executable is invoked, the dump is parsed
//! into a `PathCatalog`, and every hard path gets its `CompiledMatcher`.
//! Nothing is mutated afterwards, so lookups are plain reads.

use crate::catalog::{CompiledMatcher, PathCatalog, SEPARATOR};
use crate::dump::{DumpCommand, extract_region};
use crate::error::SyntaxError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path catalog plus one precompiled matcher per hard path.
#[derive(Debug)]
pub struct SyntaxIndex {
    app_path: PathBuf,
    catalog: PathCatalog,
    // Catalog order; lookups return the first hit.
    matchers: Vec<CompiledMatcher>,
}

/// Serializable summary of an index, for machine-readable output.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct IndexSnapshot {
    pub app: String,
    pub executable: Option<String>,
    pub paths: Vec<String>,
    pub hard_paths: Vec<String>,
}

impl SyntaxIndex {
    /// Run `<app_path> --syntax` and index its output.
    pub fn load(app_path: &Path) -> Result<Self, SyntaxError> {
        Self::load_with(&DumpCommand::new(app_path))
    }

    /// Run the given dump command and index its output.
    ///
    /// Fails with `MissingExecutable` before spawning anything when the
    /// program is not an existing file.
    pub fn load_with(command: &DumpCommand) -> Result<Self, SyntaxError> {
        let app_path = command.program();
        if !app_path.is_file() {
            return Err(SyntaxError::MissingExecutable {
                path: app_path.to_path_buf(),
            });
        }
        let captured = command.capture()?;
        Self::from_dump(app_path, &captured.text)
    }

    /// Index dump text that was captured elsewhere.
    pub fn from_dump(app_path: impl Into<PathBuf>, text: &str) -> Result<Self, SyntaxError> {
        let region = extract_region(text)?;
        let catalog = PathCatalog::parse(region);
        let matchers = catalog
            .hard_paths()
            .map(CompiledMatcher::compile)
            .collect::<Result<Vec<_>, _>>()?;
        let app_path = app_path.into();
        debug!(
            app = %app_path.display(),
            paths = catalog.len(),
            hard_paths = matchers.len(),
            "indexed syntax dump"
        );
        Ok(Self {
            app_path,
            catalog,
            matchers,
        })
    }

    /// Whether `path` resolves to a declared hard path.
    pub fn is_path(&self, path: &str) -> bool {
        self.matching(path).is_some()
    }

    /// Resolve `path` to the declared pattern it matches.
    ///
    /// Concrete paths come back unchanged; wildcard matches return the
    /// declared form, e.g. `users/42/edit` resolves to `users/*/edit`.
    pub fn get_path(&self, path: &str) -> Option<&str> {
        self.matching(path).map(CompiledMatcher::hard_path)
    }

    /// Whether any catalog entry contains `<prefix>/*`.
    pub fn has_star(&self, prefix: &str) -> bool {
        self.catalog.has_star(prefix)
    }

    pub fn app_path(&self) -> &Path {
        &self.app_path
    }

    /// Basename of the executable the dump came from.
    pub fn executable_name(&self) -> Option<&str> {
        self.app_path.file_name().and_then(|name| name.to_str())
    }

    pub fn catalog(&self) -> &PathCatalog {
        &self.catalog
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.catalog.entries()
    }

    pub fn hard_paths(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(CompiledMatcher::hard_path)
    }

    pub fn snapshot(&self) -> IndexSnapshot {
        IndexSnapshot {
            app: self.app_path.display().to_string(),
            executable: self.executable_name().map(str::to_string),
            paths: self.paths().map(str::to_string).collect(),
            hard_paths: self.hard_paths().map(str::to_string).collect(),
        }
    }

    fn matching(&self, path: &str) -> Option<&CompiledMatcher> {
        let path = path.trim_start_matches(SEPARATOR);
        self.matchers.iter().find(|matcher| matcher.is_match(path))
    }
}
