//! System prompts for the remote model.

/// System instruction sent ahead of every user message.
pub const CHAT_SYSTEM_PROMPT: &str = "You are a helpful, concise, and friendly AI assistant integrated into a web chat application. Keep your answers reasonably short unless asked for detail.";
