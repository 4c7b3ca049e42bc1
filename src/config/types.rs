//! Configuration types.

use serde::{Deserialize, Serialize};

use crate::chat::ChatMode;
use crate::knowledge::KnowledgeBounds;
use crate::resolver::TimeFormat;

/// Configuration for the remote model client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    /// Model name sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variables searched for the API key, in priority order.
    #[serde(default = "default_api_key_envs")]
    pub api_key_envs: Vec<String>,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_api_key_envs() -> Vec<String> {
    vec!["DEEPSEEK_API_KEY".to_string(), "API_KEY".to_string()]
}

fn default_temperature() -> f32 {
    1.3
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_envs: default_api_key_envs(),
            temperature: default_temperature(),
        }
    }
}

/// Top-level chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Response source used when the session starts.
    #[serde(default)]
    pub mode: ChatMode,
    /// Simulated latency before a local reply, in milliseconds.
    #[serde(default = "default_local_delay_ms")]
    pub local_delay_ms: u64,
    #[serde(default)]
    pub ai: AiConfig,
    /// Entries generated per knowledge family.
    #[serde(default)]
    pub knowledge: KnowledgeBounds,
    /// Time and date rendering.
    #[serde(default)]
    pub resolver: TimeFormat,
}

fn default_local_delay_ms() -> u64 {
    400
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            mode: ChatMode::default(),
            local_delay_ms: default_local_delay_ms(),
            ai: AiConfig::default(),
            knowledge: KnowledgeBounds::default(),
            resolver: TimeFormat::default(),
        }
    }
}
