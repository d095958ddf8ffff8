use crate::clock::{timestamp, Clock};
use crate::config::RelayConfig;
use completion_client::{ChatMessage, Client};

use anyhow::Result;
use std::sync::Arc;
use tracing::instrument;

const SYSTEM_PROMPT: &str = "You are a small friendly robot talking to a person. \
Reply in one or two short, simple sentences. \
Each message starts with the user's id; you may use it to personalise the reply.";

/// Outcome of one resolve attempt.
#[derive(Debug)]
pub enum Resolution {
    /// The provider answered; content is taken verbatim.
    Completed(String),
    /// No credential configured, so the user text is echoed back.
    Echo(String),
    /// The single provider attempt failed.
    Failed(anyhow::Error),
}

#[derive(Clone)]
pub struct Resolver {
    client: Option<Client>,
    clock: Arc<dyn Clock>,
}

impl Resolver {
    pub fn new(config: &RelayConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let client = config.completion_config().map(Client::new).transpose()?;
        Ok(Self { client, clock })
    }

    pub fn is_echo_only(&self) -> bool {
        self.client.is_none()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn resolve(&self, user_text: &str, user_id: &str) -> Resolution {
        let Some(client) = &self.client else {
            return Resolution::Echo(echo_reply(self.clock(), user_text));
        };

        tracing::debug!("Asking {} for a reply", client.model());
        match client.complete(&prompt(user_text, user_id)).await {
            Ok(reply) => Resolution::Completed(reply),
            Err(e) => Resolution::Failed(e),
        }
    }
}

pub fn prompt(user_text: &str, user_id: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("User {}: {}", user_id, user_text)),
    ]
}

pub fn echo_reply(clock: &dyn Clock, user_text: &str) -> String {
    format!("[{}] Robot: You said -> {}", timestamp(clock), user_text)
}

pub fn fallback_reply(clock: &dyn Clock, user_text: &str) -> String {
    format!(
        "[{}] (fallback) Sorry, I could not reach my brain right now, but I heard you said: {}",
        timestamp(clock),
        user_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveTime;
    use completion_client::Role;

    fn noon() -> Arc<dyn Clock> {
        Arc::new(FixedClock(NaiveTime::from_hms_opt(12, 0, 5).unwrap()))
    }

    #[tokio::test]
    async fn echoes_without_credential() {
        let resolver = Resolver::new(&RelayConfig::default(), noon()).unwrap();
        assert!(resolver.is_echo_only());

        match resolver.resolve("hello robot", "u1").await {
            Resolution::Echo(text) => {
                assert_eq!(text, "[12:00:05] Robot: You said -> hello robot")
            }
            other => panic!("expected echo, got {:?}", other),
        }
    }

    #[test]
    fn credential_enables_client() {
        let config = RelayConfig {
            llm_token: Some("sk-abc".to_string()),
            ..RelayConfig::default()
        };
        let resolver = Resolver::new(&config, noon()).unwrap();
        assert!(!resolver.is_echo_only());
    }

    #[test]
    fn prompt_embeds_user_and_text() {
        let messages = prompt("what time is it?", "esp-42");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("short"));
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("esp-42"));
        assert!(messages[1].content.contains("what time is it?"));
    }

    #[test]
    fn fallback_is_marked_and_keeps_text() {
        let clock = FixedClock(NaiveTime::from_hms_opt(23, 59, 1).unwrap());
        let text = fallback_reply(&clock, "turn left");
        assert!(text.starts_with("[23:59:01] (fallback) "));
        assert!(text.ends_with("I heard you said: turn left"));
    }
}
