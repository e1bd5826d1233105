//! Command line and environment configuration
//!
//! | Environment variable | Default | Meaning |
//! |----------------------|---------|---------|
//! | LABEL_SPOOL_DIR | ./spool | Directory print jobs are written to |
//! | LABEL_LOG_LEVEL | info | Log level when `RUST_LOG` is unset |
//! | LABEL_LOG_DIR | (none) | Write daily log files here instead of stderr |
//! | LABEL_HISTORY_FILE | (none) | JSON file seeding the suggestion history |
//!
//! Variables may also come from a `.env` file.

use clap::{Args, Parser, Subcommand};
use shared::models::FieldCategory;
use std::path::PathBuf;

/// Host settings shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Directory print jobs are written to
    #[arg(long, env = "LABEL_SPOOL_DIR", default_value = "./spool", global = true)]
    pub spool_dir: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "LABEL_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Directory for daily log files
    #[arg(long, env = "LABEL_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// JSON file seeding the suggestion history
    #[arg(long, env = "LABEL_HISTORY_FILE", global = true)]
    pub history_file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(name = "label-desk", version, about = "Garment label form host")]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a draft and render the label preview sheet
    Preview {
        /// Form draft (JSON)
        #[arg(long)]
        draft: PathBuf,
        /// Write the HTML here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a draft and spool the print payload
    Print {
        #[arg(long)]
        draft: PathBuf,
    },
    /// Show history suggestions for a query
    Suggest {
        /// MANUFACTURER, IMPORTER or PRODUCT
        #[arg(long)]
        category: FieldCategory,
        #[arg(long)]
        query: String,
    },
}
