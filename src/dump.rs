//! Syntax dump invocation and sentinel extraction.
//!
//! A tool that supports introspection prints its action paths when run with
//! `--syntax`, wrapped between two literal marker lines:
//!
//! ```text
//! **START SYNTAX DATA**
//! Executioner/*
//! Executioner/Quadrature
//! **END SYNTAX DATA**
//! ```
//!
//! `DumpCommand` runs the tool and captures its output; `extract_region`
//! slices out the text between the markers. Everything outside the markers
//! (banners, warnings, timing output) is ignored.

use crate::error::{Marker, SyntaxError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, warn};

/// Start sentinel, including the newline that precedes the first entry.
pub const START_MARKER: &str = "**START SYNTAX DATA**\n";
pub const END_MARKER: &str = "**END SYNTAX DATA**";
pub const DEFAULT_SYNTAX_FLAG: &str = "--syntax";

/// Command used to request a syntax dump from an executable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpCommand {
    pub program: PathBuf,
    pub flag: OsString,
}

/// Raw output of a syntax dump invocation.
#[derive(Clone, Debug)]
pub struct CapturedDump {
    /// Stdout followed by stderr, lossily decoded, trailing newlines trimmed.
    ///
    /// The streams are concatenated, not interleaved: markers must both
    /// appear on stdout, or both on stderr, or start on stdout and end on
    /// stderr.
    pub text: String,
    pub status: ExitStatus,
}

impl DumpCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            flag: OsString::from(DEFAULT_SYNTAX_FLAG),
        }
    }

    pub fn with_flag(mut self, flag: impl AsRef<OsStr>) -> Self {
        self.flag = flag.as_ref().to_os_string();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the executable and block until it exits.
    ///
    /// A non-zero exit status is logged but not treated as a failure; plenty of
    /// tools exit non-zero after printing their syntax.
    pub fn capture(&self) -> Result<CapturedDump, SyntaxError> {
        debug!(
            program = %self.program.display(),
            flag = %self.flag.to_string_lossy(),
            "requesting syntax dump"
        );
        let output = Command::new(&self.program)
            .arg(&self.flag)
            .output()
            .map_err(|source| SyntaxError::Spawn {
                path: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            warn!(
                program = %self.program.display(),
                code = output.status.code().unwrap_or(-1),
                "syntax dump exited with non-zero status"
            );
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        let trimmed_len = text.trim_end_matches('\n').len();
        text.truncate(trimmed_len);

        Ok(CapturedDump {
            text,
            status: output.status,
        })
    }
}

/// Return the text between the start and end markers.
///
/// The region begins on the line after `**START SYNTAX DATA**` and runs up
/// to the first `**END SYNTAX DATA**` after it.
pub fn extract_region(text: &str) -> Result<&str, SyntaxError> {
    let (_, after_start) = text
        .split_once(START_MARKER)
        .ok_or(SyntaxError::MalformedDump {
            missing: Marker::Start,
        })?;
    let (region, _) = after_start
        .split_once(END_MARKER)
        .ok_or(SyntaxError::MalformedDump {
            missing: Marker::End,
        })?;
    Ok(region)
}
