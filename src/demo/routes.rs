//! WebSocket + REST endpoints for the live demo.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
    routing::{get, post},
};
use futures::StreamExt;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};
use uuid::Uuid;

use super::sequencer::TypingSequencer;

/// Shared state for demo routes.
#[derive(Clone)]
pub struct DemoRouteState {
    pub sequencer: Arc<TypingSequencer>,
}

/// Build the demo REST + WebSocket routes.
pub fn demo_routes(sequencer: Arc<TypingSequencer>) -> Router {
    let state = DemoRouteState { sequencer };

    Router::new()
        .route("/ws/demo", get(ws_handler))
        .route("/api/demo/state", get(get_state))
        .route("/api/demo/templates", get(list_templates))
        .route("/api/demo/start", post(start_reveal))
        .route("/api/demo/cycle", post(cycle_template))
        .route("/api/demo/copy", post(copy_text))
        .with_state(state)
}

/// GET /api/demo/state — current sequencer snapshot.
async fn get_state(State(state): State<DemoRouteState>) -> impl IntoResponse {
    Json(state.sequencer.snapshot())
}

/// GET /api/demo/templates — the fixed template list.
async fn list_templates(State(state): State<DemoRouteState>) -> impl IntoResponse {
    Json(state.sequencer.templates().to_vec())
}

/// POST /api/demo/start — (re)start the reveal of the active template.
async fn start_reveal(State(state): State<DemoRouteState>) -> impl IntoResponse {
    let _reveal = state.sequencer.start();
    Json(state.sequencer.snapshot())
}

/// POST /api/demo/cycle — advance to the next template and restart.
async fn cycle_template(State(state): State<DemoRouteState>) -> impl IntoResponse {
    let _reveal = state.sequencer.cycle();
    Json(serde_json::json!({
        "active_template": state.sequencer.active_index(),
    }))
}

/// POST /api/demo/copy — export the resolved template to the clipboard.
///
/// Clipboard failure is a non-fatal notice, not an error status.
async fn copy_text(State(state): State<DemoRouteState>) -> impl IntoResponse {
    match state.sequencer.copy_text().await {
        Ok(text) => Json(serde_json::json!({ "copied": true, "text": text })),
        Err(e) => Json(serde_json::json!({ "copied": false, "notice": e.to_string() })),
    }
}

// ── WebSocket ───────────────────────────────────────────────────────────

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<DemoRouteState>) -> impl IntoResponse {
    let client_id = Uuid::new_v4();
    info!(%client_id, "demo WebSocket client connecting");
    ws.on_upgrade(move |socket| handle_socket(socket, state.sequencer, client_id))
}

/// Stream the current state and every subsequent change to the client
/// until it disconnects. A late joiner sees the demo mid-reveal.
async fn handle_socket(mut socket: WebSocket, sequencer: Arc<TypingSequencer>, client_id: Uuid) {
    let mut states = WatchStream::new(sequencer.subscribe());

    loop {
        tokio::select! {
            maybe_state = states.next() => {
                let Some(state) = maybe_state else {
                    debug!(%client_id, "sequencer dropped, closing demo socket");
                    break;
                };
                if let Ok(json) = serde_json::to_string(&state)
                    && socket.send(Message::Text(json.into())).await.is_err()
                {
                    debug!(%client_id, "client disconnected during send");
                    break;
                }
            }

            result = socket.recv() => {
                match result {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!(%client_id, "demo WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        debug!(%client_id, error = %e, "demo WebSocket error");
                        break;
                    }
                    _ => {}
                }
            }
        }
    }
}
