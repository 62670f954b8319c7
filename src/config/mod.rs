//! Run configuration.
//!
//! A run is configured through a handful of flags, usually environment
//! variables set by CI. [`RawConfig`] holds them as found, [`RawConfig::resolve`]
//! validates them into a [`RunConfig`] that is passed explicitly to the
//! selector.

use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::warn;

use crate::{
    classify::{Environment, ForkNetwork, UnitNetwork},
    partition::Shard,
};

pub mod env;

mod error;
pub use error::*;

/// Unvalidated run flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub fork: bool,
    pub fork_network: Option<String>,
    pub unit_network: Option<String>,
    pub max_chunks: Option<String>,
    pub chunk_id: Option<String>,
}

/// Validated configuration of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    pub environment: Environment,

    /// `None` for a serial run.
    pub shard: Option<Shard>,
}

impl RawConfig {
    pub fn resolve(&self) -> Result<RunConfig, ConfigError> {
        let fork = match (self.fork, self.fork_network.as_deref()) {
            (true, Some(network)) => Some(network.parse::<ForkNetwork>()?),
            (true, None) => {
                return Err(ConfigError::MissingForkNetwork {
                    fork: env::FORK,
                    network: env::FORK_NETWORK_NAME,
                });
            }
            (false, Some(network)) => {
                warn!(network, "{} is set without {}, ignoring it", env::FORK_NETWORK_NAME, env::FORK);
                None
            }
            (false, None) => None,
        };

        let unit = self
            .unit_network
            .as_deref()
            .map(str::parse::<UnitNetwork>)
            .transpose()?;

        let environment = Environment::resolve(fork, unit);
        let shard = self.shard()?;

        Ok(RunConfig { environment, shard })
    }

    fn shard(&self) -> Result<Option<Shard>, ConfigError> {
        let max_chunks = match self.max_chunks.as_deref() {
            Some(value) => parse_number(env::MAX_CHUNKS, value)?,
            None => 0,
        };
        let Some(max_chunks) = NonZeroUsize::new(max_chunks) else {
            return Ok(None);
        };

        let chunk_id = match self.chunk_id.as_deref() {
            Some(value) => parse_number(env::CHUNK_ID, value)?,
            None => return Err(ConfigError::MissingChunkId { var: env::CHUNK_ID }),
        };
        if chunk_id >= max_chunks.get() {
            return Err(ConfigError::ChunkOutOfRange {
                chunk_id,
                max_chunks: max_chunks.get(),
            });
        }

        Ok(Some(Shard::new(chunk_id, max_chunks)))
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber {
            var,
            value: value.to_owned(),
            source,
        })
}
