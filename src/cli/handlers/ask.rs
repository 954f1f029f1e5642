//! Single-question handler

use crate::cli::output::*;
use crate::models::Credentials;
use crate::rag::ContextAssembler;
use crate::rag::RagService;
use crate::session::ChatSession;
use crate::session::TurnOutcome;
use crate::AppConfig;
use crate::Result;

/// Answer one question and print the result
pub async fn handle_ask(
    config: &AppConfig,
    credentials: Credentials,
    question: String,
    verbose: bool,
) -> Result<()> {
    println!("🤖 HR Assistant");
    println!("===============\n");
    println!("Question: {question}\n");

    let rag = RagService::new(config, &credentials)?;
    let mut session = ChatSession::new(rag, credentials);

    match session.submit(&question).await {
        TurnOutcome::Answered(response) => {
            println!("📝 Answer:");
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("{}", response.answer.trim());
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

            if verbose {
                print_sources(&response.matches, &ContextAssembler::default());
            } else {
                println!("💡 Use --verbose to see retrieved sources");
            }
        }
        TurnOutcome::Failed { message } => {
            print_warning(&message);
        }
        TurnOutcome::Rejected { message } => {
            print_error(&message);
        }
    }

    Ok(())
}
