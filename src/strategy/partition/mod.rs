//! Sharding of work units across parallel runners.
//!
//! In parallel mode every runner process builds the same list of
//! [`WorkUnit`]s and partitions it into the same batches. Each runner then
//! keeps only the batch matching its own [`Shard::chunk_id`]. There is no
//! coordination between runners, so a partitioner must be a deterministic
//! function of the units and the batch count.
//!
//! Implement [`Partitioner`] to define how units are assigned to batches, or
//! use [`GreedyPartitioner`].

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::flatten::WorkUnit;

mod greedy;
pub use greedy::*;

/// Identity of the current runner among all parallel runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shard {
    /// 0-based index of this runner's batch.
    pub chunk_id: usize,

    /// Total number of batches.
    pub max_chunks: NonZeroUsize,
}

impl Shard {
    pub const fn new(chunk_id: usize, max_chunks: NonZeroUsize) -> Self {
        Self {
            chunk_id,
            max_chunks,
        }
    }
}

/// The work units assigned to one runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Batch {
    /// Units in the order they were assigned.
    pub units: Vec<WorkUnit>,

    /// Sum of the weights of `units`.
    pub weight: usize,
}

impl Batch {
    fn push(&mut self, unit: WorkUnit) {
        self.weight += unit.weight;
        self.units.push(unit);
    }
}

/// A strategy for assigning work units to batches.
pub trait Partitioner {
    /// Pick the batch for the next unit.
    ///
    /// `loads` holds the accumulated weight of every batch so far, `weight` is
    /// the weight of the unit being placed. The returned index must be smaller
    /// than `loads.len()`.
    fn pick(&mut self, loads: &[usize], weight: usize) -> usize;

    /// Assign every unit, in order, to one of `max_chunks` batches.
    ///
    /// Each unit ends up in exactly one batch and every batch keeps the order
    /// its units were encountered in.
    ///
    /// # Panics
    ///
    /// Panics if `pick` returns an index not smaller than `loads.len()`.
    fn partition(&mut self, units: Vec<WorkUnit>, max_chunks: NonZeroUsize) -> Vec<Batch> {
        let mut batches = vec![Batch::default(); max_chunks.get()];
        let mut loads = vec![0; max_chunks.get()];
        for unit in units {
            let target = self.pick(&loads, unit.weight);
            loads[target] += unit.weight;
            batches[target].push(unit);
        }
        batches
    }
}
