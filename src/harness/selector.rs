use std::mem;

use tracing::{debug, info, warn};

use crate::{
    Selection, ShardPlan,
    classify::SuiteClassifier,
    filter::{FilteredSuites, filter_root},
    flatten::flatten,
    partition::{Batch, Partitioner, Shard},
    report::BatchSummary,
    suite::Root,
};

/// Selects the part of a suite tree the current runner executes.
///
/// A selector always filters the top-level groups with its classifier. When a
/// [`Shard`] is configured it then flattens the retained groups into work
/// units, partitions them across all runners and keeps only this runner's
/// batch.
#[derive(Debug, Clone)]
pub struct SuiteSelector<Classifier, Partitioner> {
    pub(crate) classifier: Classifier,
    pub(crate) partitioner: Partitioner,
    pub(crate) shard: Option<Shard>,
}

impl<C: SuiteClassifier, P: Partitioner> SuiteSelector<C, P> {
    pub fn select(mut self, root: Root) -> Selection {
        let FilteredSuites { root, filtered_out } = filter_root(root, &self.classifier);
        info!(
            retained = root.suites.len(),
            filtered_out, "filtered top-level suites"
        );
        if root.suites.is_empty() {
            warn!("no test files belong to this run");
        }

        let Some(shard) = self.shard else {
            return Selection {
                root,
                filtered_out,
                plan: None,
            };
        };

        let Root { suites, tests } = root;
        let units = flatten(suites);
        debug!(units = units.len(), "flattened suites into work units");

        let mut batches = self.partitioner.partition(units, shard.max_chunks);
        for (index, batch) in batches.iter().enumerate() {
            debug!(
                batch = index,
                weight = batch.weight,
                units = batch.units.len(),
                "partitioned batch"
            );
        }

        let plan = ShardPlan {
            shard,
            batches: batches.iter().map(BatchSummary::from).collect(),
        };

        let own = match batches.get_mut(shard.chunk_id) {
            Some(batch) => mem::take(batch),
            None => {
                warn!(
                    chunk_id = shard.chunk_id,
                    max_chunks = shard.max_chunks.get(),
                    "chunk id is out of range, nothing to run"
                );
                Batch::default()
            }
        };
        info!(
            chunk_id = shard.chunk_id,
            max_chunks = shard.max_chunks.get(),
            units = own.units.len(),
            tests = own.weight,
            "selected shard"
        );

        Selection {
            root: Root {
                suites: own.units.into_iter().map(|unit| unit.group).collect(),
                tests,
            },
            filtered_out,
            plan: Some(plan),
        }
    }
}

impl<Classifier, Partitioner> SuiteSelector<Classifier, Partitioner> {
    pub fn with_classifier<WithClassifier: SuiteClassifier>(
        self,
        classifier: WithClassifier,
    ) -> SuiteSelector<WithClassifier, Partitioner> {
        SuiteSelector {
            classifier,
            partitioner: self.partitioner,
            shard: self.shard,
        }
    }

    pub fn with_partitioner<WithPartitioner: crate::partition::Partitioner>(
        self,
        partitioner: WithPartitioner,
    ) -> SuiteSelector<Classifier, WithPartitioner> {
        SuiteSelector {
            classifier: self.classifier,
            partitioner,
            shard: self.shard,
        }
    }

    pub fn with_shard(self, shard: Option<Shard>) -> Self {
        Self { shard, ..self }
    }
}
