//! Flattening of the retained suite tree into independently schedulable
//! [`WorkUnit`]s.
//!
//! Sharding whole files gives poor balance when a few files hold most of the
//! tests. Flattening lifts every nested group one level up so that a large file
//! can be spread over several runners.

use std::{borrow::Cow, mem};

use serde::Serialize;

use crate::suite::{Group, Timeout};

/// A group that is scheduled on its own, together with its weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkUnit {
    pub group: Group,

    /// Number of leaf tests in `group`, descendants included.
    pub weight: usize,
}

impl WorkUnit {
    pub fn new(group: Group) -> Self {
        let weight = group.test_count();
        Self { group, weight }
    }
}

/// Title of a lifted group: the parent title and the group title joined by a
/// space.
pub fn lineage_title(parent: &str, title: &str) -> Cow<'static, str> {
    match parent.is_empty() {
        true => Cow::Owned(title.to_owned()),
        false => Cow::Owned(format!("{parent} {title}")),
    }
}

/// Flatten top-level groups into work units.
///
/// For every group, in order, its direct child groups come first (renamed to
/// their lineage title and without a timeout), followed by the group itself
/// holding only its direct tests. Grandchildren stay with their lifted parent.
/// Units without any test are dropped, so the total test count is unchanged.
pub fn flatten(suites: Vec<Group>) -> Vec<WorkUnit> {
    suites
        .into_iter()
        .flat_map(|mut parent| {
            let mut units: Vec<Group> = mem::take(&mut parent.suites)
                .into_iter()
                .map(|mut child| {
                    child.title = lineage_title(&parent.title, &child.title);
                    child.timeout = Timeout::Unlimited;
                    child
                })
                .collect();
            units.push(parent);
            units
        })
        .map(WorkUnit::new)
        .filter(|unit| unit.weight > 0)
        .collect()
}
