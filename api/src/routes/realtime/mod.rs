//! WebSocket route for realtime notifications
//!
//! Authentication happens before the upgrade: a request with a missing or
//! bad access token receives a plain 401 with a typed refusal, never a
//! half-open socket.

use std::time::Duration;

use actix_web::{web, HttpRequest, HttpResponse};
use actix_ws::Message;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use uuid::Uuid;

use ripple_core::errors::ErrorResponse;
use ripple_core::repositories::{ExpiringCache, NotificationStore, UserLookup};

use crate::state::AppState;

/// Interval between server-initiated pings
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Handler for GET /ws
///
/// Upgrades to a WebSocket carrying `new_notification` events for the
/// authenticated user. The client does not send application messages;
/// inbound traffic is limited to ping/pong and close frames.
pub async fn websocket<C, U, N>(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState<C, U, N>>,
) -> actix_web::Result<HttpResponse>
where
    C: ExpiringCache + Clone + 'static,
    U: UserLookup + 'static,
    N: NotificationStore + 'static,
{
    let token = req
        .cookie(&state.cookies.access_cookie_name)
        .map(|c| c.value().to_string());
    let connection_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let user_id = match state
        .gateway
        .authenticate_and_register(token.as_deref(), connection_id, tx)
        .await
    {
        Ok(id) => id,
        Err(refused) => {
            return Ok(HttpResponse::Unauthorized()
                .json(ErrorResponse::new("CONNECTION_REFUSED", refused)));
        }
    };

    // A failed upgrade must not leave the binding behind in the registry.
    let (response, mut session, mut msg_stream) = match actix_ws::handle(&req, stream) {
        Ok(parts) => parts,
        Err(err) => {
            state.gateway.disconnect(connection_id).await;
            return Err(err);
        }
    };

    let state = state.clone();
    actix_web::rt::spawn(async move {
        let mut heartbeat = tokio::time::interval(HEARTBEAT_INTERVAL);

        loop {
            tokio::select! {
                outbound = rx.recv() => {
                    match outbound {
                        Some(text) => {
                            if session.text(text).await.is_err() {
                                break;
                            }
                        }
                        // Registry dropped the sender
                        None => break,
                    }
                }
                inbound = msg_stream.next() => {
                    match inbound {
                        Some(Ok(Message::Ping(bytes))) => {
                            if session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => break,
                        Some(Ok(_)) => {}
                        Some(Err(_)) => break,
                    }
                }
                _ = heartbeat.tick() => {
                    if session.ping(b"").await.is_err() {
                        break;
                    }
                }
            }
        }

        state.gateway.disconnect(connection_id).await;
        let _ = session.close(None).await;
        log::debug!("websocket closed for user {}", user_id);
    });

    Ok(response)
}
