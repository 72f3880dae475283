use crate::error::TestFailure;
use futures::future::{ready, LocalBoxFuture};
use futures::FutureExt;
use std::fmt::Display;
use std::future::Future;

/// What a test action produces. `Err` marks the case as failed.
pub type TestOutcome = Result<(), Box<dyn std::error::Error>>;

pub(crate) type TestAction = Box<dyn Fn() -> LocalBoxFuture<'static, TestOutcome>>;

/// A named action awaiting execution.
pub struct TestCase {
    name: String,
    pub(crate) action: TestAction,
}

impl TestCase {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> TestOutcome + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(move || ready(action()).boxed_local()),
        }
    }

    pub fn new_async<F, Fut>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = TestOutcome> + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(move || action().boxed_local()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TestStatus {
    Passed,
    Failed,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
        }
    }
}

impl Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recorded outcome of one executed case.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    pub name: String,
    pub status: TestStatus,
    // Only set when status is Failed
    pub error: Option<TestFailure>,
}

impl TestResult {
    pub(crate) fn passed(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            status: TestStatus::Passed,
            error: None,
        }
    }

    pub(crate) fn failed(name: &str, failure: TestFailure) -> Self {
        Self {
            name: name.to_owned(),
            status: TestStatus::Failed,
            error: Some(failure),
        }
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == TestStatus::Passed
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
