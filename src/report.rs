use std::fmt;

use serde::Serialize;

use crate::{
    partition::{Batch, Shard},
    suite::Root,
};

/// The outcome of a selector run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Selection {
    /// The tree this runner should execute.
    pub root: Root,

    /// Number of top-level groups removed by the classifier.
    pub filtered_out: usize,

    /// How the work was sharded, `None` for a serial run.
    pub plan: Option<ShardPlan>,
}

/// The full shard layout of a parallel run, as seen by one runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardPlan {
    pub shard: Shard,
    pub batches: Vec<BatchSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub weight: usize,
    pub units: Vec<UnitSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSummary {
    pub title: String,
    pub weight: usize,
}

impl From<&Batch> for BatchSummary {
    fn from(batch: &Batch) -> Self {
        Self {
            weight: batch.weight,
            units: batch
                .units
                .iter()
                .map(|unit| UnitSummary {
                    title: unit.group.title.to_string(),
                    weight: unit.weight,
                })
                .collect(),
        }
    }
}

impl ShardPlan {
    /// The batch of the runner this plan was computed on.
    pub fn own_batch(&self) -> Option<&BatchSummary> {
        self.batches.get(self.shard.chunk_id)
    }
}

impl fmt::Display for ShardPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, batch) in self.batches.iter().enumerate() {
            let marker = match index == self.shard.chunk_id {
                true => " <- this runner",
                false => "",
            };
            writeln!(f, "batch {index}: {} tests{marker}", batch.weight)?;
            for unit in &batch.units {
                writeln!(f, "    {} ({})", unit.title, unit.weight)?;
            }
        }
        Ok(())
    }
}
