//! The suite tree that selection works on.
//!
//! A suite tree is what a test framework hands us after it collected all test
//! files: a [`Root`] whose direct children are one [`Group`] per file, and
//! groups that nest further groups and leaf [`Test`]s.
//!
//! The tree is plain data. It derives serde so a framework adapter can hand it
//! over as JSON and read the retained tree back after selection.
//!
//! Groups form a tree, never a graph. Cycles cannot be expressed with owned
//! children, so every recursive walk in this crate terminates.

use std::{borrow::Cow, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// The parentless top of a suite tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    /// Top-level groups, one per test file.
    #[serde(default)]
    pub suites: Vec<Group>,

    /// Tests declared outside of any group.
    ///
    /// These are never filtered or sharded, every runner keeps them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<Test>,
}

impl Root {
    pub fn new(suites: Vec<Group>) -> Self {
        Self {
            suites,
            tests: Vec::new(),
        }
    }

    /// Total number of leaf tests in the whole tree.
    pub fn test_count(&self) -> usize {
        self.tests.len() + self.suites.iter().map(Group::test_count).sum::<usize>()
    }
}

/// A named node of the suite tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub title: Cow<'static, str>,

    /// The file this group was declared in.
    ///
    /// Top-level groups carry it, nested groups usually don't.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub suites: Vec<Group>,

    #[serde(default)]
    pub tests: Vec<Test>,

    #[serde(default, skip_serializing_if = "Timeout::is_inherit")]
    pub timeout: Timeout,
}

impl Group {
    pub fn new(title: impl Into<Cow<'static, str>>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_file(self, file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            ..self
        }
    }

    pub fn with_suite(mut self, suite: Group) -> Self {
        self.suites.push(suite);
        self
    }

    pub fn with_tests<T>(mut self, tests: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Test>,
    {
        self.tests.extend(tests.into_iter().map(Into::into));
        self
    }

    pub fn with_timeout(self, timeout: Timeout) -> Self {
        Self { timeout, ..self }
    }

    /// Number of leaf tests in this group, including every descendant group.
    pub fn test_count(&self) -> usize {
        match self.suites.is_empty() {
            true => self.tests.len(),
            false => self
                .suites
                .iter()
                .fold(self.tests.len(), |count, suite| count + suite.test_count()),
        }
    }
}

/// A leaf test.
///
/// Only the title matters for selection, running the test is up to the
/// framework the tree came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub title: Cow<'static, str>,
}

impl Test {
    pub fn new(title: impl Into<Cow<'static, str>>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl From<&'static str> for Test {
    fn from(title: &'static str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Test {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

/// Timeout override of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeout {
    /// Use whatever the parent group or the framework uses.
    #[default]
    Inherit,

    /// Never time out.
    Unlimited,

    /// Time out after the given duration.
    After(Duration),
}

impl Timeout {
    pub fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}
