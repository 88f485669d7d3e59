use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qdiff")]
#[command(
    author,
    version,
    about = "Predict the difficulty of exam questions with a fitted classical ML pipeline"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "QDIFF_CONFIG", default_value = "qdiff.yaml")]
        config: String,

        /// Listen address
        #[arg(short, long)]
        address: Option<String>,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory holding the fitted artifacts
        #[arg(long)]
        artifacts: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a single question and print the result
    Predict {
        /// The question to analyze
        #[arg(short, long)]
        question: String,

        /// Configuration file path
        #[arg(short, long, env = "QDIFF_CONFIG", default_value = "qdiff.yaml")]
        config: String,

        /// Directory holding the fitted artifacts
        #[arg(long)]
        artifacts: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
