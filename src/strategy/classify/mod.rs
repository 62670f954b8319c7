//! Test file classification for suite-shard.
//!
//! A classifier decides whether a test file belongs to the current run. Test
//! suites for several networks live side by side in one tree and are told apart
//! only by the naming convention of their files, so the decision is made on the
//! file path alone.
//!
//! Classification is a pure predicate. It is applied once per top-level group
//! by the [tree filter](crate::filter), which is the only place that removes
//! groups from the tree.
//!
//! Implement [`SuiteClassifier`] to define a classification strategy, or use
//! [`Environment`] for the built in network profiles.

use std::path::Path;

mod environment;
pub use environment::*;

/// A strategy for deciding which test files take part in a run.
///
/// Implementations must be deterministic. Every parallel runner classifies the
/// same tree independently and they all have to agree on the result.
///
/// For ad hoc setups `SuiteClassifier` is implemented for
/// `Fn(&Path) -> bool`, so a closure can act as a classifier.
pub trait SuiteClassifier {
    /// Return `true` if the file at `path` belongs to the current run.
    fn classify(&self, path: &Path) -> bool;
}

impl<F> SuiteClassifier for F
where
    F: Fn(&Path) -> bool,
{
    fn classify(&self, path: &Path) -> bool {
        self(path)
    }
}
