use std::num::ParseIntError;

use thiserror::Error;

/// Errors that make a run configuration unusable.
///
/// All of these are fatal for the run: a runner that guessed would compute a
/// different shard layout than its siblings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown fork network `{0}`")]
    UnknownForkNetwork(String),

    #[error("unknown unit test network `{0}`")]
    UnknownUnitNetwork(String),

    #[error("{fork} is enabled but {network} is not set")]
    MissingForkNetwork {
        fork: &'static str,
        network: &'static str,
    },

    #[error("invalid value `{value}` for {var}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var} must be set when running in parallel")]
    MissingChunkId { var: &'static str },

    #[error("chunk id {chunk_id} is out of range for {max_chunks} chunks")]
    ChunkOutOfRange { chunk_id: usize, max_chunks: usize },
}
