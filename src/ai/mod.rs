//! Remote model client for the DeepSeek chat mode.

mod client;
mod prompts;

pub use client::*;
pub use prompts::CHAT_SYSTEM_PROMPT;
