//! Precompiled matcher for a single hard path.
//!
//! Each `*` becomes `[^/]*` (any run of non-separator characters) and the
//! pattern is anchored at the end only. A query matches when the leftmost
//! match starts at offset zero, so `a/*/c` accepts `a/b/c` but not `x/a/b/c`.
//! Everything between wildcards is matched literally; `file.e` never matches
//! `fileXe`.

use crate::catalog::WILDCARD;
use crate::error::SyntaxError;
use regex::Regex;

const SEGMENT_PATTERN: &str = "[^/]*";

#[derive(Clone, Debug)]
pub struct CompiledMatcher {
    hard_path: String,
    regex: Regex,
}

impl CompiledMatcher {
    pub fn compile(hard_path: &str) -> Result<Self, SyntaxError> {
        let regex = Regex::new(&pattern_for(hard_path)).map_err(|source| {
            SyntaxError::InvalidPattern {
                path: hard_path.to_string(),
                source,
            }
        })?;
        Ok(Self {
            hard_path: hard_path.to_string(),
            regex,
        })
    }

    /// The declared path, wildcards included.
    pub fn hard_path(&self) -> &str {
        &self.hard_path
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.find(path).is_some_and(|m| m.start() == 0)
    }
}

fn pattern_for(hard_path: &str) -> String {
    let mut pattern = hard_path
        .split(WILDCARD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(SEGMENT_PATTERN);
    pattern.push('$');
    pattern
}
