use std::path::Path;

use pretty_assertions::assert_eq;
use suite_shard::{
    classify::Environment,
    config::RunConfig,
    filter::filter_root,
    flatten::flatten,
    partition::Shard,
    suite::{Group, Root},
};

use crate::support::{group, titles};

fn tree(a: &str, b: &str) -> Root {
    Root::new(vec![
        Group {
            file: Some(format!("test/g1{a}").into()),
            ..group("G1", 5)
        },
        Group {
            file: Some(format!("test/g2{a}").into()),
            suites: vec![group("child1", 4), group("child2", 4)],
            ..group("G2", 0)
        },
        Group {
            file: Some(format!("test/g3{b}").into()),
            ..group("G3", 3)
        },
    ])
}

fn mode_a(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".a.js")
}

fn shard(chunk_id: usize) -> Option<Shard> {
    Some(Shard::new(chunk_id, 2.try_into().unwrap()))
}

#[test]
fn filter_then_flatten() {
    let filtered = filter_root(tree(".a.js", ".b.js"), &mode_a);
    assert_eq!(titles(&filtered.root), ["G1", "G2"]);

    let units: Vec<_> = flatten(filtered.root.suites)
        .into_iter()
        .map(|unit| (unit.group.title.into_owned(), unit.weight))
        .collect();
    assert_eq!(
        units,
        [
            ("G1".to_string(), 5),
            ("G2 child1".to_string(), 4),
            ("G2 child2".to_string(), 4),
        ]
    );
}

#[test]
fn two_runners_split_the_scenario() {
    let run = |chunk_id| {
        suite_shard::selector(RunConfig::default())
            .with_classifier(mode_a)
            .with_shard(shard(chunk_id))
            .select(tree(".a.js", ".b.js"))
    };

    let first = run(0);
    let second = run(1);

    assert_eq!(titles(&first.root), ["G1"]);
    assert_eq!(titles(&second.root), ["G2 child1", "G2 child2"]);

    let plan = first.plan.unwrap();
    let loads: Vec<_> = plan.batches.iter().map(|b| b.weight).collect();
    assert_eq!(loads, [5, 8]);
}

#[test]
fn canonical_two_runner_scenario() {
    // G2's children ahead of G1 in the input, as if G2 was collected first
    let root = Root::new(vec![
        Group {
            file: Some("test/g2.mainnet.fork-test.js".into()),
            suites: vec![group("child1", 4), group("child2", 4)],
            ..group("G2", 0)
        },
        Group {
            file: Some("test/g1.mainnet.fork-test.js".into()),
            ..group("G1", 5)
        },
        Group {
            file: Some("test/g3.js".into()),
            ..group("G3", 3)
        },
    ]);

    let config = |chunk_id| RunConfig {
        environment: Environment::MainnetFork,
        shard: shard(chunk_id),
    };
    let first = suite_shard::selector(config(0)).select(root.clone());
    let second = suite_shard::selector(config(1)).select(root);

    assert_eq!(titles(&first.root), ["G2 child1"]);
    assert_eq!(titles(&second.root), ["G2 child2", "G1"]);
    assert_eq!(first.filtered_out, 1);
    assert_eq!(first.root.test_count(), 4);
    assert_eq!(second.root.test_count(), 9);
}

#[test]
fn serial_run_keeps_tree_shape() {
    let selection = suite_shard::selector(RunConfig::default())
        .with_classifier(mode_a)
        .select(tree(".a.js", ".b.js"));

    assert_eq!(titles(&selection.root), ["G1", "G2"]);
    assert_eq!(selection.root.suites[1].suites.len(), 2);
    assert_eq!(selection.root.test_count(), 13);
}

#[test]
fn unit_run_ignores_network_suites() {
    let root = tree(".base.js", ".js");
    let selection = suite_shard::selector(RunConfig::default()).select(root);
    assert_eq!(titles(&selection.root), ["G3"]);
}
