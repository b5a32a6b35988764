//! CLI module for lineage

mod args;

pub use args::{Args, Command};

use crate::config::{Config, OutputFormat, StoreBackend};
use crate::error::{Error, Result};
use crate::lineage::{audit, IntegrityReport, LineageResolver, NodeState, PedigreeNode};
use crate::output::{self, BracketChart};
use crate::store::{EntityStore, MemoryStore, RestStore};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the logger. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

fn execute(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Resolve {
            id,
            store,
            url,
            config,
            depth,
            format,
            sequential,
            verbose,
        } => {
            init_logging(verbose);

            let format = format.as_deref().map(OutputFormat::parse).transpose()?;
            let mut cfg = load_config(config.as_deref())?;
            cfg.merge_cli(store, url, depth, format, sequential);
            cfg.validate()?;

            info!(
                "Resolving '{}' to depth {} from {:?} store",
                id, cfg.resolver.max_depth, cfg.store.backend
            );

            let store = open_store(&cfg)?;
            let resolver = LineageResolver::new(store).with_parallel(cfg.resolver.parallel);
            let tree = resolver.resolve(&id, cfg.resolver.max_depth)?;

            info!("{}", tree_summary(&tree));

            let rendered = match cfg.output.format {
                OutputFormat::Tree => BracketChart::new().with_ids(cfg.output.show_ids).render(&tree),
                other => output::render(&tree, other)?,
            };
            println!("{}", rendered);

            Ok(ExitCode::SUCCESS)
        }

        Command::Check {
            store,
            config,
            json,
            verbose,
        } => {
            init_logging(verbose);

            let mut cfg = load_config(config.as_deref())?;
            cfg.merge_cli(store, None, None, None, false);
            cfg.validate()?;

            if cfg.store.backend != StoreBackend::File {
                return Err(Error::other("check needs a file store (use --store)"));
            }

            let records = MemoryStore::load(&cfg.store.path)?;
            let report = audit(records.records());

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", format_report(&report));
            }

            Ok(if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Version => {
            println!("lineage {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load an explicit config file, or `lineage.toml` if present
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::PathNotFound(PathBuf::from(path)));
            }
            Config::load(path)
        }
        None => Ok(Config::load_or_default(Path::new("lineage.toml"))),
    }
}

fn open_store(cfg: &Config) -> Result<Box<dyn EntityStore>> {
    match cfg.store.backend {
        StoreBackend::File => Ok(Box::new(MemoryStore::load(&cfg.store.path)?)),
        StoreBackend::Rest => Ok(Box::new(RestStore::new(cfg.store.rest()?)?)),
    }
}

fn tree_summary(tree: &PedigreeNode) -> String {
    format!(
        "Resolved {} nodes over {} generations ({} verified, {} declared, {} unknown, {} cycle)",
        tree.node_count(),
        tree.generations(),
        tree.count_state(NodeState::Verified),
        tree.count_state(NodeState::Declared),
        tree.count_state(NodeState::Unknown),
        tree.count_state(NodeState::CycleTerminated),
    )
}

/// Human-readable audit report
fn format_report(report: &IntegrityReport) -> String {
    let mut out = vec![report.summary()];

    for cycle in &report.cycles {
        out.push(format!("  cycle: {}", cycle.join(" -> ")));
    }
    for id in &report.shared_parents {
        out.push(format!("  same sire and dam: {}", id));
    }
    for link in &report.dangling {
        out.push(format!("  dangling {} link: {} -> {}", link.side, link.child, link.parent));
    }
    for mismatch in &report.gender_mismatches {
        out.push(format!(
            "  gender mismatch: {} of {} is {}",
            mismatch.side, mismatch.child, mismatch.parent
        ));
    }

    out.join("\n")
}
