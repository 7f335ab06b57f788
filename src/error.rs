//! Error taxonomy for a plugin run.
//!
//! Every failure ends the invocation: the binary prints the error to stderr
//! and exits with [`PluginError::exit_code`]. There is no structured payload.

use crate::collector::FetchError;
use crate::document::DocumentError;

/// Exit code for configuration problems (environment, invocation name).
pub const EXIT_CONFIG: i32 = 2;

/// Exit code for failures while collecting or printing statistics.
pub const EXIT_FAILURE: i32 = 1;

/// Error type for a single plugin invocation.
#[derive(Debug)]
pub enum PluginError {
    /// The statistics URL variable is unset or empty.
    MissingUrl(&'static str),
    /// The process was started without an argv[0].
    NoInvocationName,
    /// The invocation name carries no `_` separator.
    NoModeSuffix(String),
    /// The invocation name suffix names no known mode.
    UnknownMode(String),
    /// The statistics document could not be retrieved.
    Fetch(FetchError),
    /// The statistics document could not be parsed or queried.
    Document(DocumentError),
    /// Writing protocol output failed.
    Output(std::io::Error),
}

impl PluginError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PluginError::MissingUrl(_)
            | PluginError::NoInvocationName
            | PluginError::NoModeSuffix(_)
            | PluginError::UnknownMode(_) => EXIT_CONFIG,
            PluginError::Fetch(_) | PluginError::Document(_) | PluginError::Output(_) => {
                EXIT_FAILURE
            }
        }
    }
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginError::MissingUrl(var) => write!(f, "must set {} in environment", var),
            PluginError::NoInvocationName => write!(f, "can't determine invocation name"),
            PluginError::NoModeSuffix(name) => {
                write!(f, "{} has no underscore: don't know what to do", name)
            }
            PluginError::UnknownMode(suffix) => {
                write!(f, "unknown mode '{}' (expected memory or qstats)", suffix)
            }
            PluginError::Fetch(e) => write!(f, "{}", e),
            PluginError::Document(e) => write!(f, "{}", e),
            PluginError::Output(e) => write!(f, "output error: {}", e),
        }
    }
}

impl std::error::Error for PluginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PluginError::Fetch(e) => Some(e),
            PluginError::Document(e) => Some(e),
            PluginError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FetchError> for PluginError {
    fn from(e: FetchError) -> Self {
        PluginError::Fetch(e)
    }
}

impl From<DocumentError> for PluginError {
    fn from(e: DocumentError) -> Self {
        PluginError::Document(e)
    }
}

impl From<std::io::Error> for PluginError {
    fn from(e: std::io::Error) -> Self {
        PluginError::Output(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_exit_with_two() {
        assert_eq!(PluginError::MissingUrl("bind9statsurl").exit_code(), 2);
        assert_eq!(PluginError::NoInvocationName.exit_code(), 2);
        assert_eq!(PluginError::NoModeSuffix("bind9stats".into()).exit_code(), 2);
        assert_eq!(PluginError::UnknownMode("cpu".into()).exit_code(), 2);
    }

    #[test]
    fn runtime_errors_exit_with_one() {
        let fetch = PluginError::from(FetchError::Transport("connection refused".into()));
        assert_eq!(fetch.exit_code(), 1);

        let doc = PluginError::from(DocumentError::Malformed("no root element".into()));
        assert_eq!(doc.exit_code(), 1);

        let io = PluginError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn missing_url_message_names_the_variable() {
        let msg = PluginError::MissingUrl("bind9statsurl").to_string();
        assert_eq!(msg, "must set bind9statsurl in environment");
    }
}
