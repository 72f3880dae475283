use crate::error::{panic_message, TestFailure};
use crate::test_case::{TestCase, TestResult};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

pub struct TestsOutput {
    pub results: Vec<TestResult>,
    pub time: Duration,
}

// Errors, panics and timeouts all end up as a failed result
async fn run_test(case: &TestCase, timeout: Option<Duration>) -> TestResult {
    // the action is only invoked once this future is polled, so a panic in a
    // synchronous action is caught as well
    let guarded = AssertUnwindSafe(async { (case.action)().await }).catch_unwind();

    let outcome = match timeout {
        Some(limit) => match tokio::time::timeout(limit, guarded).await {
            Ok(outcome) => outcome,
            Err(_) => return TestResult::failed(case.name(), TestFailure::Timeout(limit)),
        },
        None => guarded.await,
    };

    match outcome {
        Ok(Ok(())) => TestResult::passed(case.name()),
        Ok(Err(error)) => TestResult::failed(case.name(), TestFailure::from_error(error)),
        Err(payload) => TestResult::failed(
            case.name(),
            TestFailure::Panic(panic_message(payload.as_ref())),
        ),
    }
}

/// Runs the cases one after another in order. A case does not start before
/// the previous one has settled.
///
/// The per-case timeout relies on the tokio timer. When the run is driven by
/// another executor, cases run without a timeout.
///
/// # Panics
///
/// Panics if `timeout` is set and the run is driven by a tokio runtime built
/// without the time driver (`enable_time`).
pub async fn run_tests(cases: &[TestCase], timeout: Option<Duration>) -> TestsOutput {
    let start = Instant::now();
    let timeout = timeout.filter(|_| Handle::try_current().is_ok());

    let mut results = Vec::with_capacity(cases.len());
    for case in cases {
        results.push(run_test(case, timeout).await);
    }

    TestsOutput {
        results,
        time: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::assert_equal;
    use crate::test_case::{TestOutcome, TestStatus};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[tokio::test]
    async fn panicking_sync_action_is_contained() {
        let cases = vec![
            TestCase::new("unwrap on nothing", || {
                let missing: Option<i32> = None;
                assert_equal(missing.unwrap(), 1)?;
                Ok(())
            }),
            TestCase::new("after", || Ok(())),
        ];

        let output = run_tests(&cases, None).await;

        assert_eq!(output.results.len(), 2);
        assert_eq!(output.results[0].status, TestStatus::Failed);
        assert!(matches!(
            output.results[0].error,
            Some(TestFailure::Panic(_))
        ));
        assert_eq!(output.results[1].status, TestStatus::Passed);
    }

    #[tokio::test]
    async fn stalled_action_times_out() {
        let cases = vec![
            TestCase::new_async("never settles", || async {
                futures::future::pending::<()>().await;
                TestOutcome::Ok(())
            }),
            TestCase::new("after", || Ok(())),
        ];

        let output = run_tests(&cases, Some(Duration::from_millis(20))).await;

        assert_eq!(
            output.results[0].error,
            Some(TestFailure::Timeout(Duration::from_millis(20)))
        );
        assert!(output.results[1].is_passed());
    }

    #[test]
    fn timeout_is_skipped_outside_tokio() {
        let cases = vec![
            TestCase::new("passes", || Ok(())),
            TestCase::new("fails", || {
                assert_equal(1, 2)?;
                Ok(())
            }),
        ];

        let output =
            futures::executor::block_on(run_tests(&cases, Some(Duration::from_millis(50))));

        let statuses: Vec<_> = output.results.iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![TestStatus::Passed, TestStatus::Failed]);
    }

    #[tokio::test]
    async fn cases_run_strictly_in_sequence() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let slow_log = log.clone();
        let fast_log = log.clone();
        let cases = vec![
            TestCase::new_async("slow", move || {
                let log = slow_log.clone();
                async move {
                    log.borrow_mut().push("slow start");
                    tokio::time::sleep(Duration::from_millis(30)).await;
                    log.borrow_mut().push("slow end");
                    TestOutcome::Ok(())
                }
            }),
            TestCase::new("fast", move || {
                fast_log.borrow_mut().push("fast");
                Ok(())
            }),
        ];

        run_tests(&cases, None).await;

        assert_eq!(*log.borrow(), vec!["slow start", "slow end", "fast"]);
    }
}
