use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use log::{info, LevelFilter};
use photo_dedup_core::{logging, Config, DuplicatePair, LogLevel, PhotoDeduper};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-dedup")]
#[command(about = "Find and remove images with identical pixel content")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a folder for duplicate images and optionally delete the copies
    Scan {
        /// Folder to scan (prompted for when omitted)
        directory: Option<PathBuf>,

        /// Delete without asking for confirmation
        #[arg(short, long, conflicts_with = "dry_run")]
        yes: bool,

        /// Show what would be deleted without deleting anything
        #[arg(long)]
        dry_run: bool,

        /// Hide the fingerprinting progress bar
        #[arg(long)]
        no_progress: bool,

        /// Number of threads used for fingerprinting (0 = auto)
        #[arg(long)]
        threads: Option<usize>,

        /// Verbosity level
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Write logs to rotating files in this directory instead of stderr
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "photo-dedup.json")]
        path: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            directory,
            yes,
            dry_run,
            no_progress,
            threads,
            verbose,
            log_dir,
            config,
        } => {
            let (mut config, from_file) = match config {
                Some(config_path) => (Config::from_file(&config_path)?, true),
                None => (Config::default(), false),
            };

            // Override config with command line arguments
            config.dry_run |= dry_run;
            config.show_progress = show_progress(&config, from_file, no_progress);
            if let Some(threads) = threads {
                config.threads = threads;
            }
            if verbose > 0 {
                config.log_level = match verbose {
                    1 => LogLevel::Debug,
                    _ => LogLevel::Trace,
                };
            }

            init_logging(log_dir, config.log_level)?;

            let Some(root) = select_root(directory)? else {
                println!("No folder selected.");
                return Ok(());
            };

            let deduper = PhotoDeduper::new(config)?;
            run_scan(&deduper, root, yes)
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

fn run_scan(deduper: &PhotoDeduper, root: PathBuf, yes: bool) -> Result<(), anyhow::Error> {
    println!("Scanning folder: {}", root.display());
    let pairs = deduper.scan(&root)?;

    if pairs.is_empty() {
        println!("\nNo duplicate images found.");
        return Ok(());
    }

    println!("\n{} duplicate image pairs found:", pairs.len());
    for DuplicatePair {
        duplicate,
        original,
    } in &pairs
    {
        println!(" - {} == {}", duplicate.display(), original.display());
    }

    if deduper.config().dry_run {
        println!("\nDry run, nothing will be deleted:");
        for planned in deduper.plan(&pairs) {
            println!(
                " - would delete {} (keeping {})",
                planned.delete.display(),
                planned.keep.display()
            );
        }
        return Ok(());
    }

    if !confirm_deletion(pairs.len(), yes)? {
        println!("\nDeletion cancelled by user.");
        return Ok(());
    }

    println!("\nDeleting duplicates...");
    let summary = deduper.resolve(&pairs);
    info!("Deleted {} files, skipped {}", summary.deleted, summary.skipped);

    println!("\nDeletion complete!");
    println!("\nDeleted: {} files", summary.deleted);
    println!("Skipped: {} files", summary.skipped);
    Ok(())
}

/// A config file's setting is kept unless the flag turns progress off
fn show_progress(config: &Config, from_file: bool, no_progress: bool) -> bool {
    if no_progress {
        false
    } else if from_file {
        config.show_progress
    } else {
        true
    }
}

fn init_logging(log_dir: Option<PathBuf>, level: LogLevel) -> Result<(), anyhow::Error> {
    let level = LevelFilter::from(level);
    match log_dir {
        Some(dir) => logging::init_logger(&dir, level)
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e)),
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_env(logging::LOG_ENV_VAR)
                .init();
            Ok(())
        }
    }
}

/// Folder given on the command line, or asked for interactively
fn select_root(directory: Option<PathBuf>) -> Result<Option<PathBuf>, anyhow::Error> {
    if directory.is_some() {
        return Ok(directory);
    }

    let answer: String = Input::new()
        .with_prompt("Folder to scan for duplicate images (empty to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}

fn confirm_deletion(pair_count: usize, yes: bool) -> Result<bool, anyhow::Error> {
    if yes {
        return Ok(true);
    }

    let proceed = Confirm::new()
        .with_prompt(format!(
            "Found {} duplicate image pairs. Delete one copy of each duplicate?",
            pair_count
        ))
        .default(false)
        .interact()?;
    Ok(proceed)
}
