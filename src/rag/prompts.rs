//! Grounding prompts for the HR assistant

/// Fixed phrase the model is instructed to emit when the context cannot
/// answer the question
pub const NOT_FOUND_PHRASE: &str =
    "I could not find that information in the company policies.";

/// Build the grounded HR-assistant prompt
///
/// A deterministic string template: the assembled context and the raw user
/// question are embedded verbatim, with instructions that force the model to
/// answer only from the context.
#[must_use]
pub fn build_grounded_prompt(question: &str, context: &str) -> String {
    format!(
        r#"You are an HR assistant. Answer the question using only the information provided below.
If the context does not contain the answer, say "{NOT_FOUND_PHRASE}"
Do not invent information.

Context:
{context}

User question:
{question}
"#
    )
}
