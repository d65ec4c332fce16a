//! QFDMO Taxonomy CLI Application
//!
//! This is the command-line interface for the taxonomy generator.
//! It uses the qfdmo-taxonomy library and adds:
//! - Argument parsing and optional TOML configuration
//! - Progress and statistics output
//! - One-line error reporting with a non-zero exit status

use anyhow::Result;
use clap::Parser;
use qfdmo_taxonomy::{Generator, Progress, TaxonomyStats};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;

use config::{AppConfig, RunSettings};

/// QFDMO Taxonomy - Build a plain-text taxonomy from a QFDMO JSON export
#[derive(Parser, Debug)]
#[command(name = "qfdmo-taxonomy")]
#[command(about = "Generate a category taxonomy from a QFDMO JSON export", long_about = None)]
#[command(version)]
struct Args {
    /// QFDMO JSON export to read (default: qfdmo.json)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Taxonomy file to write (default: qfdmo_taxonomy.txt)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to configuration file (taxonomy.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of categories listed in the statistics
    #[arg(long, value_name = "COUNT")]
    top: Option<usize>,

    /// Print the run statistics as JSON once done
    #[arg(long)]
    stats_json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Progress lines for the user, silenced by --quiet
struct Status {
    quiet: bool,
}

impl Status {
    fn line(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("QFDMO Taxonomy CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using taxonomy library v{}", qfdmo_taxonomy::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = resolve_settings(args)?;
    let status = Status { quiet: args.quiet };

    let stats = generate(&settings, &status)?;

    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

/// Merge command line, optional config file and defaults
fn resolve_settings(args: &Args) -> Result<RunSettings> {
    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let settings = app_config.resolve(args.input.clone(), args.output.clone(), args.top);
    log::debug!("Run settings: {:?}", settings);
    Ok(settings)
}

/// Load, build and write the taxonomy, reporting progress along the way
fn generate(settings: &RunSettings, status: &Status) -> Result<TaxonomyStats> {
    let generator = Generator::with_config(settings.taxonomy.clone());

    let stats = generator.generate_file_with_progress(
        &settings.input,
        &settings.output,
        |step| match step {
            Progress::Loading(path) => {
                status.line(format!("Loading data from {}...", path.display()))
            }
            Progress::Loaded { entries } => {
                status.line(format!("Loaded {} entries", entries));
                status.line("Extracting categories and items...");
            }
            Progress::Extracted { categories } => {
                status.line(format!("Found {} categories", categories))
            }
            Progress::Writing(_) => status.line("Generating taxonomy..."),
        },
    )?;

    status.line(format!(
        "Taxonomy generated successfully: {}",
        settings.output.display()
    ));
    status.line(format!("  - {} categories", stats.categories));
    status.line(format!("  - {} total items", stats.entries));

    status.line(format!(
        "\nTop {} categories by number of items:",
        settings.taxonomy.top_categories
    ));
    for category in &stats.top {
        status.line(format!("  {}: {} items", category.label, category.items));
    }

    Ok(stats)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
