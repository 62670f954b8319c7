//! Environment-aware test suite selection and weighted sharding.
//!
//! A test framework hands over its collected suite tree as a [`suite::Root`].
//! A [`SuiteSelector`] removes every top-level group whose file does not belong
//! to the active [`classify::Environment`] and, when the run is spread across
//! several parallel runners, keeps only the share of work assigned to the
//! current runner.
//!
//! ```
//! use suite_shard::{config::RunConfig, suite::{Group, Root}};
//!
//! let root = Root::new(vec![
//!     Group::new("Vault").with_file("test/vault.js").with_tests(["mints"]),
//!     Group::new("AMO").with_file("test/amo.mainnet.fork-test.js").with_tests(["rebalances"]),
//! ]);
//!
//! let selection = suite_shard::selector(RunConfig::default()).select(root);
//! assert_eq!(selection.root.suites.len(), 1);
//! assert_eq!(selection.root.suites[0].title, "Vault");
//! ```

pub mod config;
pub mod filter;
pub mod flatten;
pub mod suite;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;
