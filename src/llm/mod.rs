//! Answer generation module
//!
//! Sends the rendered grounding prompt to the hosted LLM and returns its
//! text completion. Single non-streaming request per turn.

pub mod client;

pub use client::LlmClient;
