use crate::error::ConfigError;
use clap::Parser;
use serde::Deserialize;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "playground.toml";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub quiet: bool,
    pub timeout: Option<Duration>, // None disables the per-case timeout
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            timeout: Some(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Args {
    /// Path to a TOML configuration file [default: playground.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress any output except for test failures.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Per-test timeout in milliseconds, 0 disables it
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    quiet: bool,

    timeout_ms: Option<u64>,
}

fn parse_config_file(path: &Path, contents: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// Returns None if the file does not exist
fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    match read_to_string(path) {
        Ok(contents) => parse_config_file(path, &contents).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn timeout_from_millis(millis: u64) -> Option<Duration> {
    (millis > 0).then(|| Duration::from_millis(millis))
}

impl RunnerConfig {
    /// Builds the configuration from command line flags and the config file.
    /// Flags take precedence over the file. An explicitly given file must
    /// exist, the default one may be absent.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => match read_config_file(path)? {
                Some(file) => file,
                None => {
                    return Err(ConfigError::Io {
                        path: path.clone(),
                        source: ErrorKind::NotFound.into(),
                    })
                }
            },
            None => read_config_file(Path::new(DEFAULT_CONFIG_FILE))?.unwrap_or_default(),
        };

        let timeout_ms = args
            .timeout_ms
            .or(file.timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Self {
            quiet: args.quiet || file.quiet,
            timeout: timeout_from_millis(timeout_ms),
        })
    }
}
