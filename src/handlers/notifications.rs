use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::notifications as notification_db;
use crate::events::hub::NotificationHub;
use crate::events::protocol::ServerEvent;
use crate::models::notifications::{NotificationQuery, settings::UpdateSettings};

/// GET /api/notifications — the caller's feed, newest first
/// (?unread_only=true to narrow).
pub async fn get_notifications(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<NotificationQuery>,
) -> impl Responder {
    let unread_only = query.unread_only.unwrap_or(false);

    match notification_db::get_notifications_for_user(db.get_ref(), user.0.id, unread_only).await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/notifications/{id}/read — mark one notification as read.
/// Other live connections of the same user are told over the event channel.
pub async fn mark_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    let notification = match notification_db::get_notification_by_id(db.get_ref(), id).await {
        Ok(Some(n)) if n.user_id == user.0.id => n,
        Ok(_) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Notification {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    match notification_db::mark_read(db.get_ref(), notification).await {
        Ok(updated) => {
            hub.publish(
                user.0.id,
                ServerEvent::NotificationRead {
                    notification_id: updated.id,
                },
            )
            .await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to mark notification as read: {e}"),
        })),
    }
}

/// PUT /api/notifications/read-all — mark the whole feed as read.
pub async fn mark_all_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match notification_db::mark_all_read(db.get_ref(), user.0.id).await {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "marked_read": count })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to mark notifications as read: {e}"),
        })),
    }
}

/// DELETE /api/notifications/{id} — remove a notification from the feed.
pub async fn delete_notification(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    // Ownership check before deleting.
    match notification_db::get_notification_by_id(db.get_ref(), id).await {
        Ok(Some(n)) if n.user_id == user.0.id => {}
        Ok(_) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Notification {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match notification_db::delete_notification(db.get_ref(), id).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Notification {id} deleted"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete notification: {e}"),
        })),
    }
}

/// GET /api/notifications/settings — the caller's delivery preferences
/// (created with defaults on first access).
pub async fn get_settings(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match notification_db::get_or_create_settings(db.get_ref(), user.0.id).await {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/notifications/settings — flip delivery preference toggles.
pub async fn update_settings(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateSettings>,
) -> impl Responder {
    match notification_db::update_settings(db.get_ref(), user.0.id, body.into_inner()).await {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update settings: {e}"),
        })),
    }
}
