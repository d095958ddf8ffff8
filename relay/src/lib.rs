pub mod clock;
pub mod config;
pub mod emotion;
pub mod gateway;
pub mod relay;
pub mod resolver;

pub use emotion::Emotion;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct BotRequest {
    pub user_text: String,
    pub user_id: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BotResponse {
    pub reply_text: String,
    pub audio_url: String,
    pub emotion: Emotion,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}
