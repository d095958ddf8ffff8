use crate::clock::Clock;
use crate::config::RelayConfig;
use crate::emotion::classify;
use crate::resolver::{fallback_reply, Resolution, Resolver};
use crate::{BotRequest, BotResponse};

use anyhow::Result;
use std::sync::Arc;
use tracing::{instrument, Span};

/// Turns a bot request into a response. Never fails: provider errors
/// become a fallback reply.
#[derive(Clone)]
pub struct Relay {
    resolver: Resolver,
    audio_url: Arc<str>,
}

impl Relay {
    pub fn new(resolver: Resolver, audio_url: &str) -> Self {
        Self {
            resolver,
            audio_url: Arc::from(audio_url),
        }
    }

    pub fn from_config(config: &RelayConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let resolver = Resolver::new(config, clock)?;
        Ok(Self::new(resolver, &config.audio_url))
    }

    pub fn is_echo_only(&self) -> bool {
        self.resolver.is_echo_only()
    }

    #[instrument(skip_all, fields(user_id, emotion, fallback))]
    pub async fn process_request(&self, request: BotRequest) -> BotResponse {
        let span = Span::current();
        span.record("user_id", request.user_id.as_str());

        let resolution = self
            .resolver
            .resolve(&request.user_text, &request.user_id)
            .await;

        let (reply_text, fallback) = match resolution {
            Resolution::Completed(text) | Resolution::Echo(text) => (text, false),
            Resolution::Failed(e) => {
                tracing::warn!("Provider call failed, replying with fallback: {:#}", e);
                (fallback_reply(self.resolver.clock(), &request.user_text), true)
            }
        };

        // Tone of the reply, not of the user's message.
        let emotion = classify(&reply_text);

        span.record("emotion", emotion.as_str());
        span.record("fallback", fallback);

        BotResponse {
            reply_text,
            audio_url: self.audio_url.to_string(),
            emotion,
        }
    }
}
