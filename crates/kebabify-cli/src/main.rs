//! kebabify — mirror an icon tree into kebab-case names.
//!
//! This binary parses arguments, loads settings, and drives the
//! scan / preview / execute stages of `kebabify-core`.

mod output;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use kebabify_core::{plan, Config, Executor};

/// Name of the config file picked up from the working directory.
const CONFIG_FILE_NAME: &str = "kebabify.toml";

#[derive(Debug, Parser)]
#[command(name = "kebabify")]
#[command(version)]
#[command(about = "Uniformly rename icon files and directories to kebab-case")]
struct Cli {
    /// Directory to process [default: Azure_Public_Service_Icons]
    directory: Option<PathBuf>,

    /// Preview changes without applying them
    #[arg(short, long)]
    dry_run: bool,

    /// Path to a config file [default: ./kebabify.toml if present]
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Loads `explicit` if given, else `cwd/kebabify.toml` if it exists, else defaults.
fn load_config(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        let path = cwd.join(path);
        return Config::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let implicit = cwd.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        tracing::debug!(path = %implicit.display(), "using config");
        return Config::load(&implicit)
            .with_context(|| format!("failed to load config {}", implicit.display()));
    }

    Ok(Config::default())
}

/// The source directory: the CLI argument, else the configured default,
/// resolved against `cwd` with `.` and `..` folded away.
fn resolve_target(cli: &Cli, config: &Config, cwd: &Path) -> PathBuf {
    let joined = match &cli.directory {
        Some(dir) => cwd.join(dir),
        None => cwd.join(&config.general.source_dir),
    };
    plan::normalize_path(&joined)
}

fn run(cli: &Cli, cwd: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref(), cwd)?;
    let target = resolve_target(cli, &config, cwd);

    writeln!(out, "{}", output::scanning(&target))?;

    let set = config
        .scanner()
        .scan(&target)
        .with_context(|| format!("failed to scan {}", target.display()))?;
    let stats = Executor::new(config.execute_options(cli.dry_run)).run(&set)?;

    if cli.dry_run {
        writeln!(out, "{}", output::dry_run_header())?;
        writeln!(out, "{}", plan::render(&set))?;
    }

    write!(out, "{}", output::summary(&stats))?;
    writeln!(out, "{}", output::outcome(&stats, cli.dry_run))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .context("failed to get current directory")
        .and_then(|cwd| run(&cli, &cwd, &mut io::stdout().lock()));

    if let Err(e) = result {
        eprintln!("{}", output::error(&e));
        std::process::exit(1);
    }
}
