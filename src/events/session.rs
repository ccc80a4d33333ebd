use actix_ws::Message;
use futures_util::StreamExt;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::db::notifications as notification_db;
use crate::events::hub::NotificationHub;
use crate::events::protocol::{ClientMessage, ServerEvent};

/// Drives one WebSocket session: forwards published events to the client,
/// handles the small set of client commands, and cleans up on disconnect.
pub async fn run(
    mut session: actix_ws::Session,
    mut msg_stream: actix_ws::MessageStream,
    mut rx: mpsc::UnboundedReceiver<ServerEvent>,
    user_id: Uuid,
    db: DatabaseConnection,
    hub: Arc<NotificationHub>,
) {
    loop {
        tokio::select! {
            // Incoming message from the WebSocket client.
            Some(msg) = msg_stream.next() => {
                match msg {
                    Ok(Message::Text(text)) => {
                        handle_client_message(&text, &mut session, user_id, &db, &hub).await;
                    }
                    Ok(Message::Ping(bytes)) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        break;
                    }
                    Err(_) => {
                        break;
                    }
                    _ => {}
                }
            }
            // Outgoing event published for this user.
            Some(event) = rx.recv() => {
                let json = match serde_json::to_string(&event) {
                    Ok(j) => j,
                    Err(_) => continue,
                };
                if session.text(json).await.is_err() {
                    break;
                }
            }
            // Both channels closed — exit.
            else => break,
        }
    }

    hub.disconnect(user_id).await;
    let _ = session.close(None).await;
}

/// Parse and handle an incoming client message.
async fn handle_client_message(
    text: &str,
    session: &mut actix_ws::Session,
    user_id: Uuid,
    db: &DatabaseConnection,
    hub: &NotificationHub,
) {
    let client_msg: ClientMessage = match serde_json::from_str(text) {
        Ok(m) => m,
        Err(e) => {
            let err = ServerEvent::Error {
                message: format!("Invalid message format: {e}"),
            };
            let _ = session
                .text(serde_json::to_string(&err).unwrap_or_default())
                .await;
            return;
        }
    };

    match client_msg {
        ClientMessage::MarkRead { notification_id } => {
            let owned = match notification_db::get_notification_by_id(db, notification_id).await {
                Ok(Some(n)) if n.user_id == user_id => n,
                Ok(_) => {
                    let err = ServerEvent::Error {
                        message: format!("Notification {notification_id} not found"),
                    };
                    let _ = session
                        .text(serde_json::to_string(&err).unwrap_or_default())
                        .await;
                    return;
                }
                Err(e) => {
                    let err = ServerEvent::Error {
                        message: format!("Database error: {e}"),
                    };
                    let _ = session
                        .text(serde_json::to_string(&err).unwrap_or_default())
                        .await;
                    return;
                }
            };

            match notification_db::mark_read(db, owned).await {
                Ok(_) => {
                    // Fan out to the user's other connections too.
                    hub.publish(user_id, ServerEvent::NotificationRead { notification_id })
                        .await;
                }
                Err(e) => {
                    let err = ServerEvent::Error {
                        message: format!("Failed to mark notification as read: {e}"),
                    };
                    let _ = session
                        .text(serde_json::to_string(&err).unwrap_or_default())
                        .await;
                }
            }
        }
    }
}
