//! nova-helper: CLI for inspecting Nova Launcher backup layouts
//!
//! This tool is not affiliated with or endorsed by TeslaCoil Software.
//! It only reads backup files you already have on your machine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nova_helper::nova::export::ExportFormat;
use nova_helper::nova::Lang;

mod commands;

#[derive(Parser)]
#[command(name = "nova-helper")]
#[command(about = "CLI helper for Nova Launcher backups", long_about = None)]
#[command(version)]
struct Cli {
    /// Label language: en or ja
    #[arg(long, global = true, default_value = "en")]
    lang: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show where every folder and app is placed
    Show {
        /// Backup file (.novabackup)
        backup_file: String,

        /// Sort both tables by: name or affiliation (default: placement order)
        #[arg(long, short)]
        sort: Option<String>,

        /// Reverse sort order
        #[arg(long, short)]
        reverse: bool,

        /// Only show: folders or apps
        #[arg(long)]
        only: Option<String>,
    },

    /// Export the folders and apps tables
    Export {
        /// Backup file (.novabackup)
        backup_file: String,

        /// Output format: html, csv or json (default: html)
        #[arg(long, short, default_value = "html")]
        format: String,

        /// Output file, or - for stdout (default: nova-list.<ext> in the download directory)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Show raw table statistics of a backup
    Inspect {
        /// Backup file (.novabackup)
        backup_file: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let lang = Lang::from_str(&cli.lang).context("Invalid language. Use 'en' or 'ja'")?;

    match cli.command {
        Commands::Show {
            backup_file,
            sort,
            reverse,
            only,
        } => {
            let options = commands::show::ShowOptions {
                sort,
                reverse,
                only,
                lang,
            };
            let output = commands::show::execute(&backup_file, options)?;
            println!("{}", output);
        }

        Commands::Export {
            backup_file,
            format,
            output,
        } => {
            let format = ExportFormat::from_str(&format)
                .context("Invalid format. Use 'html', 'csv' or 'json'")?;
            commands::export::execute(&backup_file, format, output.as_deref(), lang)?;
        }

        Commands::Inspect { backup_file } => {
            let output = commands::inspect::execute(&backup_file)?;
            println!("{}", output);
        }
    }

    Ok(())
}
