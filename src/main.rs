mod demo_suite;

use clap::Parser;
use playground_test_driver::test_reporter::{report_tests, write_banner};
use playground_test_driver::{Args, RunnerConfig, TestRegistry};
use std::io::stdout;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match RunnerConfig::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut registry = TestRegistry::new();
    registry.set_timeout(config.timeout);
    demo_suite::register_all(&mut registry);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("Failed to start the async runtime");
            eprintln!("Cause: {}", error);
            return ExitCode::FAILURE;
        }
    };

    if !config.quiet {
        if let Err(error) = write_banner(&mut stdout().lock()) {
            eprintln!("Failed to write test report: {}", error);
            return ExitCode::FAILURE;
        }
    }

    let summary = runtime.block_on(registry.run_all());

    report_tests(registry.results(), &summary, config.quiet)
}
