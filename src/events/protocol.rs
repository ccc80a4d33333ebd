use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::notifications::{Kind, Priority};

// ── Client -> Server messages ──

/// Messages the client sends to the server over WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Mark a notification as read without a separate HTTP round trip.
    MarkRead { notification_id: Uuid },
}

// ── Server -> Client events ──

/// Events the server pushes to the client over WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A notification was created for this user.
    Notification {
        id: Uuid,
        kind: Kind,
        title: String,
        body: String,
        priority: Priority,
        booking_id: Option<Uuid>,
        created_at: String,
    },
    /// A notification was marked as read (on this or another connection).
    NotificationRead { notification_id: Uuid },
    /// An error occurred.
    Error { message: String },
}

impl ServerEvent {
    pub fn from_notification(n: &crate::models::notifications::Model) -> Self {
        ServerEvent::Notification {
            id: n.id,
            kind: n.kind,
            title: n.title.clone(),
            body: n.body.clone(),
            priority: n.priority,
            booking_id: n.booking_id,
            created_at: n.created_at.to_rfc3339(),
        }
    }
}
