use crate::partition::Partitioner;

/// Streaming greedy load balancing.
///
/// Units are placed one after another, in input order, on a least loaded
/// batch. Among equally loaded batches the choice is made by folding over the
/// batch indices `1..` with batch `0` as the starting candidate: the candidate
/// is kept while it is empty or strictly lighter than the scanned batch,
/// otherwise the scanned batch takes over. So the first empty batch wins, and
/// a tie between non-empty batches goes to the later index.
///
/// The tie-break is part of the shard layout every runner computes, keep it
/// as is.
///
/// The result is not optimal, but the heaviest and lightest batch never differ
/// by more than the heaviest single unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyPartitioner;

impl Partitioner for GreedyPartitioner {
    fn pick(&mut self, loads: &[usize], _: usize) -> usize {
        (1..loads.len()).fold(0, |candidate, index| {
            match loads[candidate] == 0 || loads[candidate] < loads[index] {
                true => candidate,
                false => index,
            }
        })
    }
}
