use crate::diff::fmt_diff;
use std::any::Any;
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Raised by an assertion helper when the observed value disagrees with the
/// expected condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionError {
    pub message: String,
    pub expected: String,
    pub actual: String,
    // expected/actual hold raw text and are rendered as a line diff
    text_diff: bool,
}

impl AssertionError {
    pub fn new(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            expected: expected.into(),
            actual: actual.into(),
            text_diff: false,
        }
    }

    /// Mismatch between two texts. Multi-line texts display as a line diff.
    pub fn text(message: impl Into<String>, expected: &str, actual: &str) -> Self {
        if expected.contains('\n') || actual.contains('\n') {
            Self {
                message: message.into(),
                expected: expected.to_owned(),
                actual: actual.to_owned(),
                text_diff: true,
            }
        } else {
            Self::new(message, format!("{:?}", expected), format!("{:?}", actual))
        }
    }

    #[must_use]
    pub fn is_text_diff(&self) -> bool {
        self.text_diff
    }
}

impl Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text_diff {
            writeln!(f, "{}:", self.message)?;
            fmt_diff(f, &self.expected, &self.actual, false)
        } else {
            write!(
                f,
                "{}. Expected: {}, Actual: {}",
                self.message, self.expected, self.actual
            )
        }
    }
}

impl std::error::Error for AssertionError {}

/// Why a test case was recorded as failed.
///
/// Every variant yields the same `Failed` status; they only differ in how the
/// failure is described.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestFailure {
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// The action returned an error that is not an assertion violation.
    #[error("{0}")]
    Fault(String),

    #[error("panicked: {0}")]
    Panic(String),

    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl TestFailure {
    pub(crate) fn from_error(error: Box<dyn std::error::Error>) -> Self {
        match error.downcast::<AssertionError>() {
            Ok(assertion) => TestFailure::Assertion(*assertion),
            Err(error) => TestFailure::Fault(error.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
