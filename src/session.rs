//! Chat session orchestration
//!
//! One `ChatSession` per user session. Each submitted question runs the
//! pipeline states in order: validate credentials, embed, search, assemble,
//! generate, respond. The transcript records the conversation; it lives only
//! as long as the session.

use tracing::warn;

use crate::models::Credentials;
use crate::models::Turn;
use crate::rag::RagResponse;
use crate::rag::RagService;

/// Shown when the user submits a question before both API keys are set
pub const MISSING_CREDENTIALS_NOTICE: &str =
    "Please provide both the Google API key and the vector index API key before asking questions.";

/// How one submitted question ended
#[derive(Debug)]
pub enum TurnOutcome {
    /// The pipeline produced an answer; it was recorded as the assistant turn
    Answered(RagResponse),
    /// A pipeline step failed; the error message was recorded as the
    /// assistant turn and the session remains usable
    Failed { message: String },
    /// A credential was missing; no pipeline step ran and no assistant turn
    /// was recorded
    Rejected { message: String },
}

/// Session state: credentials, transcript, and the pipeline
pub struct ChatSession {
    rag: RagService,
    credentials: Credentials,
    transcript: Vec<Turn>,
}

impl ChatSession {
    pub fn new(rag: RagService, credentials: Credentials) -> Self {
        Self {
            rag,
            credentials,
            transcript: Vec::new(),
        }
    }

    /// The conversation so far, in arrival order
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Submit one user question and run it through the pipeline
    ///
    /// The caller must not pass empty input; only a non-empty submission
    /// starts a turn. The user turn is always recorded. An assistant turn is
    /// recorded on success and on pipeline failure, but not when the
    /// credential guard rejects the turn.
    pub async fn submit(&mut self, question: &str) -> TurnOutcome {
        self.transcript.push(Turn::user(question));

        // Hard short-circuit: no downstream call is made without both keys
        if !self.credentials.is_complete() {
            warn!("Turn rejected: missing credentials");
            return TurnOutcome::Rejected {
                message: MISSING_CREDENTIALS_NOTICE.to_string(),
            };
        }

        match self.rag.query(question).await {
            Ok(response) => {
                self.transcript.push(Turn::assistant(&response.answer));
                TurnOutcome::Answered(response)
            }
            Err(e) => {
                // The failure is part of the conversation record
                let message = format!("Something went wrong: {e}");
                self.transcript.push(Turn::assistant(&message));
                TurnOutcome::Failed { message }
            }
        }
    }
}
