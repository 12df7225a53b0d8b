use std::fmt;
use std::path::PathBuf;

/// Which sentinel line was missing from a syntax dump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => f.write_str(crate::dump::START_MARKER.trim_end()),
            Marker::End => f.write_str(crate::dump::END_MARKER),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Executable {} not found!", .path.display())]
    MissingExecutable { path: PathBuf },
    #[error("failed to run {}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed syntax dump: missing {missing} marker")]
    MalformedDump { missing: Marker },
    /// Literal segments are escaped, so this only fires when a hard path
    /// exceeds the regex compiled-size limit.
    #[error("hard path '{path}' does not compile to a matcher")]
    InvalidPattern {
        path: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_names_the_path() {
        let err = SyntaxError::MissingExecutable {
            path: PathBuf::from("/opt/app/bin/moose-opt"),
        };
        assert_eq!(err.to_string(), "Executable /opt/app/bin/moose-opt not found!");
    }

    #[test]
    fn malformed_dump_names_the_marker() {
        let start = SyntaxError::MalformedDump {
            missing: Marker::Start,
        };
        assert_eq!(
            start.to_string(),
            "malformed syntax dump: missing **START SYNTAX DATA** marker"
        );
        let end = SyntaxError::MalformedDump {
            missing: Marker::End,
        };
        assert_eq!(
            end.to_string(),
            "malformed syntax dump: missing **END SYNTAX DATA** marker"
        );
    }
}
