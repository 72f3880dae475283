//! A small test registry and runner.
//!
//! Cases are registered as a name plus an action, synchronous or async, and
//! executed one at a time in registration order. A failing case (error,
//! panic or timeout) is recorded and never stops the rest of the run.
//!
//! ```no_run
//! use playground_test_driver::{assert_equal, TestRegistry};
//!
//! # async fn demo() {
//! let mut registry = TestRegistry::new();
//! registry.register("addition", || {
//!     assert_equal(2 + 2, 4)?;
//!     Ok(())
//! });
//!
//! let summary = registry.run_all().await;
//! assert_eq!(summary.counts(), (1, 0, 1));
//! # }
//! ```

pub mod assertions;
mod diff;
pub mod error;
pub mod global_configuration;
pub mod state;
pub mod test_case;
pub mod test_registry;
pub mod test_reporter;
pub mod test_runner;
pub mod value;

pub use assertions::*;
pub use diff::render_diff;
pub use error::{AssertionError, ConfigError, TestFailure};
pub use global_configuration::{Args, RunnerConfig};
pub use state::RunSummary;
pub use test_case::{TestCase, TestOutcome, TestResult, TestStatus};
pub use test_registry::TestRegistry;
pub use value::Value;
