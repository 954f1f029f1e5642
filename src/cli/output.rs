//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the policyrag CLI

use crate::models::Role;
use crate::models::SearchMatch;
use crate::models::Turn;
use crate::rag::ContextAssembler;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// This prevents panics when truncating strings with multi-byte UTF-8
/// characters (emojis, etc.)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print an informational line
pub fn print_info(message: &str) {
    println!("{message}");
}

/// Print a success line
pub fn print_success(message: &str) {
    println!("✅ {message}");
}

/// Print a warning line
pub fn print_warning(message: &str) {
    println!("⚠️  {message}");
}

/// Print an error line
pub fn print_error(message: &str) {
    eprintln!("❌ {message}");
}

/// Print text word-wrapped to the given width
pub fn print_wrapped(text: &str, width: usize) {
    for line in text.lines() {
        if line.chars().count() <= width {
            println!("{line}");
            continue;
        }

        let mut current = String::new();
        for word in line.split_whitespace() {
            if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > width {
                println!("{current}");
                current.clear();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            println!("{current}");
        }
    }
}

/// Print the transcript so far, one block per turn
pub fn print_transcript(transcript: &[Turn]) {
    for turn in transcript {
        match turn.role {
            Role::User => println!("You: {}", turn.content),
            Role::Assistant => {
                println!("Assistant:");
                print_wrapped(&turn.content, 70);
            }
        }
        println!();
    }
}

/// Print retrieved matches with similarity scores, marking the ones that
/// entered the context
pub fn print_sources(matches: &[SearchMatch], assembler: &ContextAssembler) {
    if matches.is_empty() {
        println!("📚 Sources: none returned by the index");
        return;
    }

    println!("📚 Sources ({} matches):", matches.len());
    for (idx, result) in matches.iter().enumerate() {
        let marker = if assembler.qualifies(result.score) {
            "✓"
        } else {
            "✗"
        };
        println!(
            "  {}. [{marker}] score {:.3} | {}",
            idx + 1,
            result.score,
            truncate_str(&result.metadata.text_content, 80)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_char_boundary() {
        assert_eq!(truncate_str("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_str("short", 10), "short");
    }
}
