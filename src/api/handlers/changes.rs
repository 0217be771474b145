use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;

use crate::api::state::AppState;

/// Live change feed: one SSE event per successful store write, carrying
/// the serialized [`crate::changes::Change`]. Subscribers that fall
/// behind skip the messages they missed and keep going.
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = std::result::Result<SseEvent, Infallible>>> {
    let rx = state.service_context.hub.subscribe();

    let stream = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(change) => match SseEvent::default().event("change").json_data(&change) {
                    Ok(event) => return Some((Ok(event), rx)),
                    Err(e) => {
                        tracing::error!("Failed to encode change event: {}", e);
                        continue;
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Change subscriber lagged, skipped {} messages", skipped);
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
