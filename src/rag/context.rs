//! Context assembly from retrieved fragments

use crate::models::SearchMatch;

/// Minimum similarity for a fragment to enter the context.
/// Strict inequality: a score of exactly 0.5 is excluded.
pub const SCORE_THRESHOLD: f32 = 0.5;

/// Fixed context used when no fragment qualifies
pub const NO_CONTEXT_SENTINEL: &str = "No specific information was found in the documents.";

/// Assembler for building a grounding context from search matches
///
/// Pure and total: assembly never fails.
pub struct ContextAssembler {
    score_threshold: f32,
}

impl ContextAssembler {
    /// Create a new context assembler with a custom threshold
    #[must_use]
    pub const fn new(score_threshold: f32) -> Self {
        Self { score_threshold }
    }

    /// Assemble a grounding context from search matches
    ///
    /// Retains matches scoring strictly above the threshold, in input order,
    /// one bulleted line per fragment. Falls back to [`NO_CONTEXT_SENTINEL`]
    /// when nothing qualifies.
    #[must_use]
    pub fn assemble(&self, matches: &[SearchMatch]) -> String {
        let mut context = String::new();

        for result in matches {
            if result.score > self.score_threshold {
                context.push_str("- ");
                context.push_str(&result.metadata.text_content);
                context.push('\n');
            }
        }

        if context.is_empty() {
            return NO_CONTEXT_SENTINEL.to_string();
        }

        context
    }

    /// Whether a match with this score would enter the context
    #[must_use]
    pub fn qualifies(&self, score: f32) -> bool {
        score > self.score_threshold
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(SCORE_THRESHOLD)
    }
}
