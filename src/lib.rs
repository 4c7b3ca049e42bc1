//! LiteChat - terminal chat with a local keyword knowledge base and an
//! optional DeepSeek backend.

pub mod ai;
pub mod chat;
pub mod config;
pub mod display;
pub mod knowledge;
pub mod resolver;
