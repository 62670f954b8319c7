//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use suite_shard::config::RawConfig;

/// Select and shard test suites for the current CI runner
#[derive(Parser, Debug)]
#[command(name = "suite-shard")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the suite tree this runner should execute as JSON
    Select(SelectArgs),

    /// Show how suites are spread over all runners
    Plan(PlanArgs),

    /// Show which environment test files belong to
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Suite tree as JSON, read from stdin when omitted or `-`
    pub tree: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Pretty print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Suite tree as JSON, read from stdin when omitted or `-`
    pub tree: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Test file paths
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Run flags, each overriding its environment variable.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Run fork tests [env: FORK]
    #[arg(long)]
    pub fork: bool,

    /// Network to run fork tests against [env: FORK_NETWORK_NAME]
    #[arg(long)]
    pub fork_network: Option<String>,

    /// Network whose dedicated unit tests run [env: UNIT_TESTS_NETWORK]
    #[arg(long)]
    pub unit_network: Option<String>,

    /// Number of parallel runners, 0 for a serial run [env: MAX_CHUNKS]
    #[arg(long)]
    pub max_chunks: Option<String>,

    /// 0-based identity of this runner [env: CHUNK_ID]
    #[arg(long)]
    pub chunk_id: Option<String>,
}

impl RunArgs {
    /// Layer the flags over `env`, a given flag wins over its variable.
    pub fn over(self, env: RawConfig) -> RawConfig {
        let flag = |value: Option<String>| value.filter(|value| !value.trim().is_empty());
        RawConfig {
            fork: self.fork || env.fork,
            fork_network: flag(self.fork_network).or(env.fork_network),
            unit_network: flag(self.unit_network).or(env.unit_network),
            max_chunks: flag(self.max_chunks).or(env.max_chunks),
            chunk_id: flag(self.chunk_id).or(env.chunk_id),
        }
    }
}
