use crate::relay::Relay;
use crate::{BotRequest, BotResponse, StatusResponse};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use std::future::Future;
use tokio::net::TcpListener;

pub const STATUS_MESSAGE: &str = "ESP32 bot backend running";

pub fn app(relay: Relay) -> Router {
    Router::new().route("/", get(status_handler)).route(
        "/bot",
        post(move |bot_request: Json<BotRequest>| bot_handler(bot_request, relay.clone())),
    )
}

/// Serves until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, relay: Relay, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(relay))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: STATUS_MESSAGE.to_string(),
    })
}

async fn bot_handler(request: Json<BotRequest>, relay: Relay) -> Json<BotResponse> {
    let request = request.0;

    tracing::info!("Processing request: {:?}", &request);

    Json(relay.process_request(request).await)
}
