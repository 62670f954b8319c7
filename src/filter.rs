//! Tree filtering for suite-shard.
//!
//! Filtering decides which top-level groups of a [`Root`] take part in the run.
//! Groups whose file does not belong to the active environment are removed
//! from the tree entirely, they do not show up in any later step.
//!
//! Only top-level groups carry a file, so filtering never recurses. Nested
//! groups live and die with the group they were declared in.

use crate::{
    classify::SuiteClassifier,
    suite::{Group, Root},
};

/// The result of filtering a [`Root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSuites {
    /// The root with only the retained top-level groups, in their original
    /// order.
    pub root: Root,

    /// The number of top-level groups that were removed.
    pub filtered_out: usize,
}

/// Keep the top-level groups whose file satisfies `classifier`.
///
/// Groups without a file are removed as well. Applying the same classifier to
/// an already filtered root retains everything.
pub fn filter_root<C>(root: Root, classifier: &C) -> FilteredSuites
where
    C: SuiteClassifier + ?Sized,
{
    let Root { suites, tests } = root;
    let before = suites.len();
    let suites: Vec<Group> = suites
        .into_iter()
        .filter(|group| {
            group
                .file
                .as_deref()
                .is_some_and(|file| classifier.classify(file))
        })
        .collect();

    FilteredSuites {
        filtered_out: before - suites.len(),
        root: Root { suites, tests },
    }
}
