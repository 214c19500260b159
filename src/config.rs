use std::env;
use std::path::PathBuf;

/// Application-level flags, read from the environment.
///
/// CLI flags may additionally enable `mock_mode` and `save_output` on top of
/// whatever the environment says.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bypass all provider calls and return canned artifacts
    pub mock_mode: bool,
    /// Persist the four artifacts under `output_dir` after a successful run
    pub save_output: bool,
    /// Directory for persisted artifacts
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Read MOCK_MODE, SAVE_OUTPUT and OUTPUT_DIR from the environment
    pub fn from_env() -> Self {
        Self {
            mock_mode: env_flag("MOCK_MODE"),
            save_output: env_flag("SAVE_OUTPUT"),
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
        }
    }
}

/// A flag is enabled iff the variable is set to "true", case-insensitive
fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
