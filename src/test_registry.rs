use crate::state::RunSummary;
use crate::test_case::{TestCase, TestOutcome, TestResult};
use crate::test_runner::run_tests;
use std::future::Future;
use std::time::Duration;

/// Owns an ordered list of test cases and the results of the latest run.
///
/// `run_all` borrows the registry mutably, so cases cannot be added while a
/// run is in progress.
#[derive(Debug, Default)]
pub struct TestRegistry {
    tests: Vec<TestCase>,
    results: Vec<TestResult>,
    // per-case limit, none means wait forever
    timeout: Option<Duration>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self {
            tests: vec![],
            results: vec![],
            timeout: None,
        }
    }

    /// Fails a case that has not settled within `timeout`.
    ///
    /// The limit only applies when the run is driven by a tokio runtime with
    /// the time driver enabled. Under any other executor cases run without it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Registers a synchronous case. Names need not be unique.
    pub fn register<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn() -> TestOutcome + 'static,
    {
        self.add_test(TestCase::new(name, action));
    }

    /// Registers a case whose action must be awaited before it is scored.
    pub fn register_async<F, Fut>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = TestOutcome> + 'static,
    {
        self.add_test(TestCase::new_async(name, action));
    }

    pub fn add_test(&mut self, test: TestCase) {
        self.tests.push(test);
    }

    /// Executes every registered case in registration order, replacing the
    /// results of any previous run.
    ///
    /// # Panics
    ///
    /// Panics if a timeout is set and the run is driven by a tokio runtime
    /// built without the time driver.
    pub async fn run_all(&mut self) -> RunSummary {
        let output = run_tests(&self.tests, self.timeout).await;
        self.results = output.results;

        RunSummary::tally(&self.results, output.time)
    }

    /// Results of the most recent run, in registration order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    #[must_use]
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn clear(&mut self) {
        self.tests.clear();
        self.results.clear();
    }
}
