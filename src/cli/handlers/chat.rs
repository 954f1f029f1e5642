//! Interactive chat handler

use std::io::Write;
use std::io::{
    self,
};
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::output::*;
use crate::models::Credentials;
use crate::rag::RagService;
use crate::session::ChatSession;
use crate::session::TurnOutcome;
use crate::AppConfig;
use crate::Result;

/// Simple spinner for showing progress
pub(crate) struct Spinner {
    message: String,
    running: Arc<AtomicBool>,
}

impl Spinner {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn start(&self) {
        let message = self.message.clone();
        let running = self.running.clone();
        running.store(true, Ordering::Relaxed);

        std::thread::spawn(move || {
            let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
            let mut idx = 0;

            while running.load(Ordering::Relaxed) {
                print!("\r   {} {}...", frames[idx], message);
                io::stdout().flush().ok();
                idx = (idx + 1) % frames.len();
                std::thread::sleep(Duration::from_millis(80));
            }

            // Clear the line
            print!("\r{}\r", " ".repeat(80));
            io::stdout().flush().ok();
        });
    }

    pub(crate) fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(100)); // Give time to clear
    }
}

/// Run the interactive chat loop until the user exits
pub async fn handle_chat(config: &AppConfig, credentials: Credentials, verbose: bool) -> Result<()> {
    let rag = RagService::new(config, &credentials)?;
    let mut session = ChatSession::new(rag, credentials);

    println!("╔════════════════════════════════════════════════════════════════╗");
    println!("║  💬 HR Assistant                                               ║");
    println!("║  Answers are grounded on the indexed policy documents.         ║");
    println!("║  Commands: 'exit', 'quit', Ctrl+C                              ║");
    println!("╚════════════════════════════════════════════════════════════════╝");
    println!();
    print_info(&format!("Index: {}", config.search_index()));
    println!();

    // Replay whatever the session already holds
    print_transcript(session.transcript());

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;
        if read == 0 {
            // EOF
            println!();
            break;
        }
        let question = input.trim();

        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit")
            || question.eq_ignore_ascii_case("quit")
            || question.eq_ignore_ascii_case("q")
        {
            println!();
            print_success("👋 Conversation ended. Goodbye!");
            break;
        }

        println!();

        let spinner = Spinner::new("Thinking");
        spinner.start();
        let outcome = session.submit(question).await;
        spinner.stop();

        match outcome {
            TurnOutcome::Answered(response) => {
                println!("Assistant:");
                println!();
                print_wrapped(response.answer.trim(), 70);
                if verbose {
                    println!();
                    print_sources(&response.matches, &crate::rag::ContextAssembler::default());
                }
            }
            TurnOutcome::Failed { message } => {
                println!("Assistant:");
                println!();
                print_warning(&message);
            }
            TurnOutcome::Rejected { message } => {
                print_error(&message);
            }
        }

        println!();
        println!("─────────────────────────────────────────────────────────────────");
        println!();
    }

    Ok(())
}
