//! Command-line runner: evaluate a rule file against an ESTree JSON tree.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use challenger::frontends::EstreeFrontend;
use challenger::{RuleList, Suite, SuiteReport, TreeFrontend};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "challenger")]
#[command(about = "Check a parsed program against a list of structural challenges")]
#[command(version)]
struct Args {
    /// Rule list (JSON)
    #[arg(short, long)]
    rules: PathBuf,

    /// ESTree JSON tree; reads stdin when omitted or `-`
    #[arg(short, long)]
    tree: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Reject malformed rules instead of evaluating them
    #[arg(long)]
    strict: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable terminal output
    Terminal,
    /// JSON output for machine consumption
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise the verbose flag picks the level.
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("challenger=debug")
    } else {
        EnvFilter::new("challenger=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let rules = RuleList::from_path(&args.rules)
        .with_context(|| format!("loading rules from {}", args.rules.display()))?;
    debug!(count = rules.len(), "rules loaded");

    let suite = if args.strict {
        Suite::validated(rules).context("rule list failed validation")?
    } else {
        for problem in rules.problems() {
            tracing::warn!("{}", problem);
        }
        Suite::new(rules)
    };

    let source = read_tree_source(args.tree.as_ref())?;
    let frontend = EstreeFrontend::new();
    let tree = frontend
        .load(&source)
        .with_context(|| format!("loading {} tree", frontend.name()))?;
    debug!(statements = tree.len(), "tree loaded");

    let report = suite.run(&tree);
    match args.format {
        OutputFormat::Terminal => print_terminal(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}

fn read_tree_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading tree from {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("reading tree from stdin")?;
            Ok(source)
        }
    }
}

fn print_terminal(report: &SuiteReport) {
    for outcome in &report.results {
        let mark = if outcome.satisfied { "✓" } else { "✗" };
        match &outcome.tag {
            Some(tag) => println!(
                "{} {} {} [{}]",
                mark, outcome.polarity, outcome.target_kind, tag
            ),
            None => println!("{} {} {}", mark, outcome.polarity, outcome.target_kind),
        }
    }

    if report.all_satisfied() {
        println!("All challenges complete.");
    } else {
        println!(
            "{} of {} challenges complete.",
            report.passed_count(),
            report.results.len()
        );
    }
}
