//! CLI command handlers

pub mod ask;
pub mod chat;
pub mod config;

pub use ask::handle_ask;
pub use chat::handle_chat;
pub use config::handle_config;
