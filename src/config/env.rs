//! Environment variable names and lookup.

use std::env;

use crate::config::RawConfig;

/// Enables fork tests when truthy.
pub const FORK: &str = "FORK";
/// The network fork tests run against.
pub const FORK_NETWORK_NAME: &str = "FORK_NETWORK_NAME";
/// The network whose dedicated unit tests run.
pub const UNIT_TESTS_NETWORK: &str = "UNIT_TESTS_NETWORK";
/// Number of parallel runners, unset or `0` for a serial run.
pub const MAX_CHUNKS: &str = "MAX_CHUNKS";
/// 0-based identity of this runner.
pub const CHUNK_ID: &str = "CHUNK_ID";

impl RawConfig {
    /// Read the raw configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the raw configuration through `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name| lookup(name).filter(|value: &String| !value.trim().is_empty());
        Self {
            fork: get(FORK).is_some_and(|value| is_truthy(&value)),
            fork_network: get(FORK_NETWORK_NAME),
            unit_network: get(UNIT_TESTS_NETWORK),
            max_chunks: get(MAX_CHUNKS),
            chunk_id: get(CHUNK_ID),
        }
    }
}

/// Whether an environment flag value means "on".
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
