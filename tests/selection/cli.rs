use std::{
    io::Write,
    process::{Command, Output},
};

use pretty_assertions::assert_eq;
use suite_shard::suite::{Root, Timeout};
use tempfile::NamedTempFile;

use crate::support::titles;

const TREE: &str = r#"{
    "suites": [
        {
            "title": "Vault",
            "file": "test/vault.mainnet.fork-test.js",
            "tests": [{ "title": "mints" }],
            "suites": [
                { "title": "redeem", "tests": [{ "title": "a" }, { "title": "b" }], "timeout": { "after": { "secs": 40, "nanos": 0 } } },
                { "title": "rebase", "tests": [{ "title": "c" }] }
            ]
        },
        {
            "title": "Token",
            "file": "test/token.js",
            "tests": [{ "title": "transfers" }]
        }
    ]
}"#;

const FLAGS: [&str; 5] = [
    "FORK",
    "FORK_NETWORK_NAME",
    "UNIT_TESTS_NETWORK",
    "MAX_CHUNKS",
    "CHUNK_ID",
];

fn tree_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TREE.as_bytes()).unwrap();
    file
}

fn run_cli(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_suite-shard"));
    for flag in FLAGS {
        command.env_remove(flag);
    }
    command.env("RUST_LOG", "off").args(args).envs(env.iter().copied());
    command.output().unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn selects_unit_suites_by_default() {
    let file = tree_file();
    let output = run_cli(&["select", file.path().to_str().unwrap()], &[]);

    let root: Root = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(titles(&root), ["Token"]);
}

#[test]
fn selects_own_shard_from_environment() {
    let file = tree_file();
    let path = file.path().to_str().unwrap();
    let env = |chunk_id| {
        [
            ("FORK", "true"),
            ("FORK_NETWORK_NAME", "mainnet"),
            ("MAX_CHUNKS", "2"),
            ("CHUNK_ID", chunk_id),
        ]
    };

    let select = |chunk_id| -> Root {
        let output = run_cli(&["select", path], &env(chunk_id));
        serde_json::from_str(&stdout(&output)).unwrap()
    };
    let first = select("0");
    let second = select("1");

    assert_eq!(titles(&first), ["Vault redeem"]);
    assert_eq!(titles(&second), ["Vault rebase", "Vault"]);
    assert_eq!(first.suites[0].timeout, Timeout::Unlimited);
}

#[test]
fn flags_override_environment() {
    let file = tree_file();
    let output = run_cli(
        &[
            "plan",
            file.path().to_str().unwrap(),
            "--fork",
            "--fork-network",
            "mainnet",
            "--max-chunks",
            "2",
            "--chunk-id",
            "1",
        ],
        &[("UNIT_TESTS_NETWORK", "base")],
    );

    assert_eq!(
        stdout(&output),
        "environment: mainnet-fork\n\
         filtered out: 1 suites\n\
         batch 0: 2 tests\n    Vault redeem (2)\n\
         batch 1: 2 tests <- this runner\n    Vault rebase (1)\n    Vault (1)\n"
    );
}

#[test]
fn rejects_out_of_range_chunk() {
    let file = tree_file();
    let output = run_cli(
        &["select", file.path().to_str().unwrap()],
        &[("MAX_CHUNKS", "2"), ("CHUNK_ID", "2")],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "{stderr}");
}

#[test]
fn classifies_paths() {
    let output = run_cli(
        &[
            "classify",
            "test/vault.js",
            "test/amo.plume.fork-test.js",
            "test/x.fork-test.js",
        ],
        &[],
    );

    assert_eq!(
        stdout(&output),
        "unit\ttest/vault.js\nplume-fork\ttest/amo.plume.fork-test.js\n-\ttest/x.fork-test.js\n"
    );
}

#[test]
fn fork_switch_does_not_take_the_tree_path() {
    let file = tree_file();
    let output = run_cli(
        &[
            "select",
            "--fork",
            file.path().to_str().unwrap(),
            "--fork-network",
            "mainnet",
        ],
        &[],
    );

    let root: Root = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(titles(&root), ["Vault"]);
}

#[test]
fn fork_falls_back_to_environment() {
    let file = tree_file();
    let output = run_cli(
        &["select", file.path().to_str().unwrap(), "--fork-network", "mainnet"],
        &[("FORK", "yes")],
    );

    let root: Root = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(titles(&root), ["Vault"]);
}

#[test]
fn blank_environment_values_count_as_unset() {
    let file = tree_file();
    let output = run_cli(
        &["select", file.path().to_str().unwrap()],
        &[("MAX_CHUNKS", " "), ("CHUNK_ID", ""), ("UNIT_TESTS_NETWORK", "  ")],
    );

    let root: Root = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(titles(&root), ["Token"]);
}
