/// Full setup script generator
///
/// Concatenates the SQL fragments, in dependency order, into one script that
/// can be pasted into the Supabase SQL editor.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{error, LevelFilter};

use supabase_setup_tools::utils::logging::setup_logging;
use supabase_setup_tools::utils::output_formatter;
use supabase_setup_tools::{load_config, SetupConcatenator};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "generate_full_setup",
    version,
    about = "Assemble the full database setup script from the ordered SQL fragments"
)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Directory containing the SQL fragments
    #[arg(long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Output file (default: db_FULL_SETUP.sql, or the configured value)
    #[arg(long = "output")]
    output: Option<PathBuf>,

    /// Set logging level
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write log records to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level, args.log_file.as_deref())?;

    let config = load_config(args.config.as_deref())?;
    let output = args
        .output
        .unwrap_or_else(|| args.dir.join(&config.setup.output));

    let concatenator = SetupConcatenator::new(&args.dir, config.setup.files, output);

    println!(
        "{}",
        format!("Generating {}...", concatenator.output().display()).bold()
    );

    match concatenator.generate() {
        Ok(report) => {
            println!("{}", output_formatter::format_concat_report(&report));
            Ok(())
        }
        Err(e) => {
            error!("Setup script generation failed: {}", e);
            eprintln!("\n{}", format!("Error generating the file: {}", e).red());
            process::exit(1);
        }
    }
}
