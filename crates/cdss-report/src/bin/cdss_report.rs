//! cdss-report binary
//!
//! Command-line access to model result summaries, the AUC box plot and
//! decision path trees.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cdss_report::{
    completion_percent, format_summary_table, parse_tree, summarize, AucBoxPlot, ModelResults,
    ReportConfig,
};

#[derive(Parser)]
#[command(name = "cdss-report")]
#[command(about = "Summaries and charts for clinical decision support model results")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print accuracy, precision, recall and AUC of every model
    Summary {
        /// Result payload (JSON)
        results: PathBuf,

        /// Print the summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the cross-validation AUC box plot as SVG
    Boxplot {
        /// Result payload (JSON)
        results: PathBuf,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,

        /// Layout and SVG configuration (TOML, or JSON by extension)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Surface width in pixels
        #[arg(long)]
        width: Option<f64>,

        /// Surface height in pixels
        #[arg(long)]
        height: Option<f64>,
    },

    /// Parse a decision path dump
    Tree {
        /// Tree text dump
        dump: PathBuf,

        /// Print hierarchy JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Normalize prediction cells to completion percentages
    Percent {
        /// Cell values, probabilities or percentages
        #[arg(required = true)]
        cells: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Summary { results, json } => {
            let results = ModelResults::load(&results)?;
            let summaries = summarize(&results)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                print!("{}", format_summary_table(&summaries));
            }
        }

        Command::Boxplot {
            results,
            output,
            config,
            width,
            height,
        } => {
            let results = ModelResults::load(&results)?;
            let mut config = match config {
                Some(path) => ReportConfig::load(&path)?,
                None => ReportConfig::default(),
            };
            if let Some(width) = width {
                config.svg.width = width;
            }
            if let Some(height) = height {
                config.svg.height = height;
            }

            AucBoxPlot::new(config).write_to(&output, &results)?;
        }

        Command::Tree { dump, json } => {
            let text = std::fs::read_to_string(&dump)?;
            let tree = parse_tree(&text);
            if json {
                println!("{}", tree.to_json()?);
            } else {
                print!("{}", tree);
            }
        }

        Command::Percent { cells } => {
            for cell in cells {
                println!("{}\t{}%", cell, completion_percent(&cell));
            }
        }
    }

    Ok(())
}
