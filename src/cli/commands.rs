//! CLI command definitions and argument parsing

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "policyrag")]
#[command(about = "Retrieval-augmented HR assistant grounded on an indexed policy corpus")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging and source display
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session with the HR assistant
    Chat {
        /// Google API key used for embedding and answer generation
        #[arg(long)]
        google_api_key: Option<String>,
        /// API key for the hosted vector index
        #[arg(long)]
        pinecone_api_key: Option<String>,
        /// Vector index to search (overrides the configured index)
        #[arg(long)]
        index: Option<String>,
    },
    /// Ask a single question and exit
    Ask {
        /// The question to answer
        question: String,
        /// Google API key used for embedding and answer generation
        #[arg(long)]
        google_api_key: Option<String>,
        /// API key for the hosted vector index
        #[arg(long)]
        pinecone_api_key: Option<String>,
        /// Vector index to search (overrides the configured index)
        #[arg(long)]
        index: Option<String>,
    },
    /// Show current configuration
    Config,
}
