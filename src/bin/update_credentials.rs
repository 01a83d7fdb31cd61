/// Supabase credential updater
///
/// Swaps the old project URL and anon key for the new ones across the app's
/// source files. Refuses to run until a real anon key has been supplied.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{error, LevelFilter};

use supabase_setup_tools::utils::logging::setup_logging;
use supabase_setup_tools::utils::output_formatter;
use supabase_setup_tools::{load_config, CredentialUpdate, SetupError};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "update_credentials",
    version,
    about = "Replace the Supabase URL and anon key in the app's source files"
)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Directory the target files are relative to
    #[arg(long = "root", default_value = ".")]
    root: PathBuf,

    /// New Supabase project URL
    #[arg(long = "new-url")]
    new_url: Option<String>,

    /// New anon key
    #[arg(long = "new-key")]
    new_key: Option<String>,

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

    let mut settings = load_config(args.config.as_deref())?.credentials;
    if let Some(url) = args.new_url {
        settings.new_url = url;
    }
    if let Some(key) = args.new_key {
        settings.new_key = key;
    }

    println!("{}\n", "Updating Supabase credentials...".bold());

    let update = match CredentialUpdate::new(&settings) {
        Ok(update) => update,
        Err(SetupError::PlaceholderKey { .. }) => {
            error!("New key is still the placeholder, nothing was changed");
            println!("{}", output_formatter::format_placeholder_help(&settings.new_url));
            process::exit(1);
        }
        Err(e) => {
            error!("Invalid credential settings: {}", e);
            eprintln!("{}", format!("ERROR: {}", e).red());
            process::exit(1);
        }
    };

    println!(
        "{}",
        output_formatter::format_update_banner(update.new_url(), update.new_key())
    );

    let summary = update.update_all(&args.root, &settings.files);
    println!("{}", output_formatter::format_update_summary(&summary));

    if !summary.all_succeeded() {
        process::exit(1);
    }

    Ok(())
}
