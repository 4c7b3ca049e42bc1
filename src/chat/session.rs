//! Chat session dispatching each message to the selected response source.

use std::time::Duration;

use crate::ai::{AiClient, AiError};
use crate::config::ChatConfig;
use crate::knowledge::KnowledgeBase;
use crate::resolver::Resolver;

use super::{ChatMode, Message, ResponseSource};

/// Greeting shown when a session starts.
#[must_use]
pub fn welcome_message(entries: usize) -> String {
    format!(
        "你好！我是简易聊天机器人 (终端版)。\n\n✅ 已加载本地知识库：{entries} 条\n💡 包含：学习建议、效率技巧、心情鼓励、健康提醒等。\n\n试着问我 \"时间\"、\"笑话\" 或输入 \"学习建议1\"！\n或者切换到 DeepSeek 模式进行自由对话。"
    )
}

/// One conversation, kept in memory for the life of the process.
#[derive(Debug)]
pub struct ChatSession {
    resolver: Resolver,
    remote: Result<AiClient, AiError>,
    mode: ChatMode,
    local_delay: Duration,
    transcript: Vec<Message>,
}

impl ChatSession {
    /// Start a session and post the welcome message.
    ///
    /// A missing remote client is not fatal: local mode keeps working and
    /// the error is reported each time the remote mode is used.
    #[must_use]
    pub fn new(resolver: Resolver, remote: Result<AiClient, AiError>, mode: ChatMode) -> Self {
        let welcome = Message::assistant(
            welcome_message(resolver.knowledge().len()),
            ResponseSource::Local,
        );
        Self {
            resolver,
            remote,
            mode,
            local_delay: Duration::ZERO,
            transcript: vec![welcome],
        }
    }

    /// Build a session from configuration.
    #[must_use]
    pub fn from_config(config: &ChatConfig) -> Self {
        let resolver = Resolver::new(KnowledgeBase::build(&config.knowledge))
            .with_format(config.resolver.clone());
        let remote = AiClient::from_config(&config.ai);
        if let Err(e) = &remote {
            tracing::info!(error = %e, "Remote mode unavailable");
        }
        Self::new(resolver, remote, config.mode)
            .with_local_delay(Duration::from_millis(config.local_delay_ms))
    }

    /// Simulated latency before each local reply.
    #[must_use]
    pub fn with_local_delay(mut self, delay: Duration) -> Self {
        self.local_delay = delay;
        self
    }

    #[must_use]
    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChatMode) {
        tracing::debug!(from = ?self.mode, to = ?mode, "Switching chat mode");
        self.mode = mode;
    }

    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Append the user's message and the reply from the current source.
    ///
    /// Returns the appended reply. Remote failures become `System` messages.
    pub async fn send(&mut self, content: &str) -> &Message {
        self.transcript.push(Message::user(content));

        let reply = match self.mode {
            ChatMode::Local => {
                if !self.local_delay.is_zero() {
                    tokio::time::sleep(self.local_delay).await;
                }
                Message::assistant(self.resolver.resolve(content), ResponseSource::Local)
            }
            ChatMode::DeepSeek => self.ask_remote(content).await,
        };

        self.transcript.push(reply);
        &self.transcript[self.transcript.len() - 1]
    }

    async fn ask_remote(&self, content: &str) -> Message {
        let result = match &self.remote {
            Ok(client) => client.ask(content).await,
            Err(e) => {
                tracing::warn!(error = %e, "Remote model not configured");
                return Message::system(e.transcript_message());
            }
        };

        match result {
            Ok(text) => Message::assistant(text, ResponseSource::Cloud),
            Err(e) => {
                tracing::error!(error = %e, "Remote model request failed");
                Message::system(e.transcript_message())
            }
        }
    }
}
