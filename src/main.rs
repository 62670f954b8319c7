use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use suite_shard::{
    Selection, ShardPlan,
    classify::Environment,
    config::{RawConfig, RunConfig},
    suite::Root,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, ClassifyArgs, Command, PlanArgs, RunArgs, SelectArgs};

fn main() -> Result<()> {
    // stdout carries the output, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Select(args) => select(args),
        Command::Plan(args) => plan(args),
        Command::Classify(args) => classify(args),
    }
}

fn run_config(args: RunArgs) -> Result<RunConfig> {
    let config = args
        .over(RawConfig::from_env())
        .resolve()
        .context("invalid run configuration")?;
    info!(
        environment = %config.environment,
        parallel = config.shard.is_some(),
        "resolved run configuration"
    );
    Ok(config)
}

fn read_tree(path: Option<&Path>) -> Result<Root> {
    match path {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open suite tree {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse suite tree {}", path.display()))
        }
    }
}

fn read_stdin() -> Result<Root> {
    serde_json::from_reader(io::stdin().lock()).context("failed to parse suite tree from stdin")
}

fn select(args: SelectArgs) -> Result<()> {
    let config = run_config(args.run)?;
    let root = read_tree(args.tree.as_deref())?;
    let selection = suite_shard::selector(config).select(root);

    let mut out = BufWriter::new(io::stdout().lock());
    match args.pretty {
        true => serde_json::to_writer_pretty(&mut out, &selection.root)?,
        false => serde_json::to_writer(&mut out, &selection.root)?,
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct PlanOutput<'s> {
    config: RunConfig,
    filtered_out: usize,
    retained_tests: usize,
    plan: Option<&'s ShardPlan>,
}

fn plan(args: PlanArgs) -> Result<()> {
    let config = run_config(args.run)?;
    let root = read_tree(args.tree.as_deref())?;
    let Selection {
        root,
        filtered_out,
        plan,
        ..
    } = suite_shard::selector(config).select(root);

    let mut out = BufWriter::new(io::stdout().lock());
    if args.json {
        let output = PlanOutput {
            config,
            filtered_out,
            retained_tests: root.test_count(),
            plan: plan.as_ref(),
        };
        serde_json::to_writer_pretty(&mut out, &output)?;
        writeln!(out)?;
    } else {
        writeln!(out, "environment: {}", config.environment)?;
        writeln!(out, "filtered out: {filtered_out} suites")?;
        match plan {
            Some(plan) => write!(out, "{plan}")?,
            None => writeln!(
                out,
                "serial run: {} suites, {} tests",
                root.suites.len(),
                root.test_count()
            )?,
        }
    }
    out.flush()?;
    Ok(())
}

fn classify(args: ClassifyArgs) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for path in &args.paths {
        match Environment::of(path) {
            Some(env) => writeln!(out, "{env}\t{}", path.display())?,
            None => writeln!(out, "-\t{}", path.display())?,
        }
    }
    out.flush()?;
    Ok(())
}
