use crate::test_case::TestResult;
use std::time::Duration;

/// Aggregate counts of one run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            total: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn tally(results: &[TestResult], elapsed: Duration) -> Self {
        let passed = results.iter().filter(|result| result.is_passed()).count();

        Self {
            passed,
            failed: results.len() - passed,
            total: results.len(),
            elapsed,
        }
    }

    /// `(passed, failed, total)`
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.passed, self.failed, self.total)
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
