use std::collections::HashMap;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::events::protocol::ServerEvent;

/// A handle to send events to one connected WebSocket client.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    pub sender: mpsc::UnboundedSender<ServerEvent>,
}

/// Manages all active WebSocket connections, keyed by user.
///
/// Each user may hold several connections (multiple tabs/devices); an event
/// published for a user fans out to all of them. This is the real push
/// channel behind the notification feed — handlers publish here right after
/// persisting a notification row.
pub struct NotificationHub {
    /// user_id -> connected client handles
    connections: RwLock<HashMap<Uuid, Vec<ClientHandle>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new WebSocket connection for a user.
    /// Returns a receiver the WebSocket session should drain.
    pub async fn connect(&self, user_id: Uuid) -> mpsc::UnboundedReceiver<ServerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut connections = self.connections.write().await;
        connections
            .entry(user_id)
            .or_insert_with(Vec::new)
            .push(ClientHandle { sender: tx });

        rx
    }

    /// Remove one closed connection for a user.
    pub async fn disconnect(&self, user_id: Uuid) {
        let mut connections = self.connections.write().await;

        if let Some(handles) = connections.get_mut(&user_id) {
            // Drop the first handle whose receiver is gone; if none is
            // detectably closed, drop one arbitrarily (the session ended).
            if let Some(pos) = handles.iter().position(|h| h.sender.is_closed()) {
                handles.remove(pos);
            } else {
                handles.pop();
            }

            if handles.is_empty() {
                connections.remove(&user_id);
            }
        }
    }

    /// Push an event to every live connection of a user.
    pub async fn publish(&self, user_id: Uuid, event: ServerEvent) {
        let connections = self.connections.read().await;
        if let Some(handles) = connections.get(&user_id) {
            for handle in handles {
                // A failed send means the receiver was dropped; disconnect()
                // cleans that handle up.
                let _ = handle.sender.send(event.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_every_connection_of_the_user() {
        let hub = NotificationHub::new();
        let user = Uuid::new_v4();

        let mut rx1 = hub.connect(user).await;
        let mut rx2 = hub.connect(user).await;
        let mut other = hub.connect(Uuid::new_v4()).await;

        hub.publish(
            user,
            ServerEvent::NotificationRead {
                notification_id: Uuid::new_v4(),
            },
        )
        .await;

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
        assert!(other.try_recv().is_err());
    }

    #[tokio::test]
    async fn disconnect_drops_the_closed_handle() {
        let hub = NotificationHub::new();
        let user = Uuid::new_v4();

        let rx = hub.connect(user).await;
        drop(rx);
        hub.disconnect(user).await;

        // Publishing to a fully disconnected user is a no-op.
        hub.publish(
            user,
            ServerEvent::NotificationRead {
                notification_id: Uuid::new_v4(),
            },
        )
        .await;
    }
}
