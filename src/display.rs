//! Colored terminal rendering for the chat transcript.

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

use crate::chat::{ChatMode, Message, ResponseSource, Role};
use crate::knowledge::KnowledgeBase;

/// Local wall-clock label for a message timestamp.
fn clock_label(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

/// Plain-text tag naming the author of a message.
#[must_use]
pub fn message_tag(message: &Message) -> &'static str {
    match (message.role, message.source) {
        (Role::User, _) => "[YOU]",
        (Role::Assistant, Some(ResponseSource::Cloud)) => "[BOT:CLOUD]",
        (Role::Assistant, _) => "[BOT:LOCAL]",
        (Role::System, _) => "[SYSTEM]",
    }
}

/// Print the header line showing the current mode.
pub fn print_banner(mode: ChatMode, entries: usize) {
    let status = match mode {
        ChatMode::Local => format!("● Local Mode ({entries} Entries)").green().to_string(),
        ChatMode::DeepSeek => "● Connected to DeepSeek API".blue().to_string(),
    };
    println!("{} {}", "LiteChat 500+".bold(), status);
    println!(
        "{}",
        "/local, /deepseek to switch mode; exit, quit or Ctrl-D to leave".dimmed()
    );
    let _ = io::stdout().flush();
}

/// Print one transcript message. Newlines in the content are kept as-is.
pub fn print_message(message: &Message) {
    let tag = message_tag(message);
    let tag = match message.role {
        Role::User => tag.cyan().bold().to_string(),
        Role::Assistant => tag.green().bold().to_string(),
        Role::System => tag.red().bold().to_string(),
    };
    let content = match message.role {
        Role::System => message.content.red().to_string(),
        _ => message.content.clone(),
    };
    println!(
        "{} {} {}",
        clock_label(&message.timestamp).dimmed(),
        tag,
        content
    );
    let _ = io::stdout().flush();
}

/// Print the input prompt without a trailing newline.
pub fn print_prompt(mode: ChatMode) {
    print!("{} ", format!("{}>", mode.label()).bold());
    let _ = io::stdout().flush();
}

/// Print a mode change notice.
pub fn print_mode_switch(mode: ChatMode) {
    println!("{} {}", "[MODE]".yellow().bold(), mode.label());
    let _ = io::stdout().flush();
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Print knowledge base totals per family.
pub fn print_stats(knowledge: &KnowledgeBase) {
    println!("{} {}", "Entries:".bold(), knowledge.len());
    for (family, count) in knowledge.family_counts() {
        println!("  {:<8} {:>4}  {}", family.prefix(), count, format!("{family:?}").dimmed());
    }
    let _ = io::stdout().flush();
}
