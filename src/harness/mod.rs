mod selector;
pub use selector::SuiteSelector;

use crate::{classify::Environment, config::RunConfig, partition::GreedyPartitioner};

/// Build a selector for the given run configuration.
///
/// The selector classifies files by the configured [`Environment`] and, in a
/// parallel run, shards with the [`GreedyPartitioner`].
pub fn selector(config: RunConfig) -> SuiteSelector<Environment, GreedyPartitioner> {
    SuiteSelector {
        classifier: config.environment,
        partitioner: GreedyPartitioner,
        shard: config.shard,
    }
}
