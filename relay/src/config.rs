use clap::Parser;
use completion_client::ClientConfig;
use std::fmt::Debug;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct:free";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_REFERER: &str = "http://localhost";
pub const DEFAULT_TITLE: &str = "ESP32 Bot Relay";

#[derive(Parser)]
#[clap(about = "HTTP relay between a robot client and a chat-completion provider")]
pub struct Args {
    #[clap(short, long, env = "RELAY_ADDRESS", default_value = "0.0.0.0:8000")]
    pub address: String,
    /// Provider credential. Without it the relay only echoes.
    #[clap(long, env = "LLM_TOKEN", hide_env_values = true)]
    pub llm_token: Option<String>,
    #[clap(long, env = "LLM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub llm_endpoint: String,
    #[clap(long, env = "LLM_MODEL", default_value = DEFAULT_MODEL)]
    pub llm_model: String,
    #[clap(
        long,
        env = "LLM_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub llm_timeout_secs: u64,
    #[clap(long, env = "LLM_REFERER", default_value = DEFAULT_REFERER)]
    pub llm_referer: String,
    #[clap(long, env = "LLM_TITLE", default_value = DEFAULT_TITLE)]
    pub llm_title: String,
    /// Returned as `audio_url` until speech synthesis exists.
    #[clap(long, env = "AUDIO_URL", default_value = "")]
    pub audio_url: String,
}

/// Process-wide settings, built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct RelayConfig {
    pub llm_token: Option<String>,
    pub llm_endpoint: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub referer: String,
    pub title: String,
    pub audio_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            llm_token: None,
            llm_endpoint: DEFAULT_ENDPOINT.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            audio_url: String::new(),
        }
    }
}

impl Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("llm_token", &self.llm_token.as_ref().map(|_| "<redacted>"))
            .field("llm_endpoint", &self.llm_endpoint)
            .field("llm_model", &self.llm_model)
            .field("llm_timeout", &self.llm_timeout)
            .field("audio_url", &self.audio_url)
            .finish()
    }
}

impl From<&Args> for RelayConfig {
    fn from(args: &Args) -> Self {
        Self {
            llm_token: args
                .llm_token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_owned),
            llm_endpoint: args.llm_endpoint.clone(),
            llm_model: args.llm_model.clone(),
            llm_timeout: Duration::from_secs(args.llm_timeout_secs),
            referer: args.llm_referer.clone(),
            title: args.llm_title.clone(),
            audio_url: args.audio_url.clone(),
        }
    }
}

impl RelayConfig {
    /// Client settings, or `None` when no credential is configured.
    pub fn completion_config(&self) -> Option<ClientConfig> {
        let token = self.llm_token.clone()?;
        Some(ClientConfig {
            endpoint: self.llm_endpoint.clone(),
            token,
            model: self.llm_model.clone(),
            timeout: self.llm_timeout,
            referer: self.referer.clone(),
            title: self.title.clone(),
        })
    }
}
