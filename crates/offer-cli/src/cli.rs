//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use offer_types::{ExportFormat, OutputFormat};

#[derive(Parser)]
#[command(name = "offer-pilot")]
#[command(version)]
#[command(about = "Vehicle order capture and quotation export")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Generation backend base URL override
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export an order file as a quotation document
    Export {
        /// Path to the order TOML file
        order: PathBuf,

        /// Output directory. Uses config value if not specified.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Document format (excel, pdf, report). Uses config value if not specified.
        #[arg(long, short = 'f')]
        format: Option<ExportFormat>,

        /// Render via the generation backend instead of locally
        #[arg(long)]
        remote: bool,
    },

    /// Export every order file in a folder
    Batch {
        /// Folder containing order TOML files
        folder: PathBuf,

        /// Output directory. Uses config value if not specified.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Document format (excel, pdf, report). Uses config value if not specified.
        #[arg(long, short = 'f')]
        format: Option<ExportFormat>,

        /// Render via the generation backend instead of locally
        #[arg(long)]
        remote: bool,
    },

    /// Parse an order file and print the normalized vehicle
    Parse {
        /// Path to the order TOML file
        order: PathBuf,

        /// Output format (json, table)
        #[arg(long, short = 'f', default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Resolve the price of an option code at a production date
    Price {
        /// Option code
        code: String,

        /// Production date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show or update the configuration
    Config {
        /// Set the generation backend base URL
        #[arg(long)]
        set_backend_url: Option<String>,

        /// Set the sales person shown on generated documents
        #[arg(long)]
        set_sales_person: Option<String>,
    },
}
