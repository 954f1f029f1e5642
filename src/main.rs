use clap::Parser;
use policyrag::cli::handlers;
use policyrag::cli::Cli;
use policyrag::cli::Commands;
use policyrag::config::AppConfig;
use policyrag::models::Credentials;
use policyrag::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    if cli.verbose {
        policyrag::logging::init_logging_with_level("debug")?;
    } else {
        policyrag::logging::init_logging(Some(&config))?;
    }

    match cli.command {
        Commands::Chat {
            google_api_key,
            pinecone_api_key,
            index,
        } => {
            let config = with_index_override(config, index);
            let credentials = Credentials::new(
                google_api_key.unwrap_or_default(),
                pinecone_api_key.unwrap_or_default(),
            );
            handlers::handle_chat(&config, credentials, cli.verbose).await?;
        }
        Commands::Ask {
            question,
            google_api_key,
            pinecone_api_key,
            index,
        } => {
            let config = with_index_override(config, index);
            let credentials = Credentials::new(
                google_api_key.unwrap_or_default(),
                pinecone_api_key.unwrap_or_default(),
            );
            handlers::handle_ask(&config, credentials, question, cli.verbose).await?;
        }
        Commands::Config => {
            handlers::handle_config(&config)?;
        }
    }

    Ok(())
}

fn with_index_override(mut config: AppConfig, index: Option<String>) -> AppConfig {
    if let Some(index) = index {
        config.search.index = index;
    }
    config
}
