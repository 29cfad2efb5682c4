use std::{convert::Infallible, time::Duration as StdDuration};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::{interval, Duration as TokioDuration};

use crate::{models::Alert, AppState};

// GET /ws/alerts
pub async fn ws_alerts(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let rx = state.alerts_tx.subscribe();
    ws.on_upgrade(move |socket| handle_alerts_socket(socket, rx))
}

async fn handle_alerts_socket(mut client_ws: WebSocket, mut rx: broadcast::Receiver<Alert>) {
    tracing::info!("WS alerts client connected");

    // Ping browser to keep alive
    let mut ping = interval(TokioDuration::from_secs(25));
    ping.tick().await;

    loop {
        tokio::select! {
            _ = ping.tick() => {
                if client_ws.send(Message::Ping(b"ping".to_vec())).await.is_err() {
                    break;
                }
            }

            next = rx.recv() => {
                match next {
                    Ok(alert) => {
                        let txt = match serde_json::to_string(&alert) {
                            Ok(t) => t,
                            Err(e) => {
                                tracing::error!("alert encode failed: {}", e);
                                continue;
                            }
                        };
                        if client_ws.send(Message::Text(txt)).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("WS alerts client lagged, skipped {} alerts", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            client_msg = client_ws.recv() => {
                match client_msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                }
            }
        }
    }

    tracing::info!("WS alerts client disconnected");
    let _ = client_ws.close().await;
}

// GET /events  (SSE)
pub async fn sse_events(
    State(state): State<AppState>,
) -> Sse<impl futures_util::stream::Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events_tx.subscribe();

    let stream = futures_util::stream::unfold(rx, |mut rx| async {
        let evt = match rx.recv().await {
            Ok(name) => Event::default().event(name).data("1"),
            Err(RecvError::Lagged(_)) => Event::default().event("ping").data("lagged"),
            Err(RecvError::Closed) => return None,
        };

        Some((Ok(evt), rx))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(StdDuration::from_secs(20))
            .text("keep-alive"),
    )
}
