use actix_web::{HttpRequest, HttpResponse, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::events::hub::NotificationHub;
use crate::events::session;

/// Query params for the WebSocket handshake endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    pub token: String,
}

/// GET /api/events/ws?token=<jwt>
///
/// Upgrades the HTTP connection to a WebSocket carrying the caller's
/// notification events. Authenticates via query param token (browsers
/// can't send Authorization headers during the WebSocket handshake).
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<WsQuery>,
    db: web::Data<DatabaseConnection>,
    jwks_cache: web::Data<Arc<JwksCache>>,
    hub: web::Data<Arc<NotificationHub>>,
) -> Result<HttpResponse, actix_web::Error> {
    // 1. Validate the JWT.
    let claims = jwt::validate_token(&query.token, jwks_cache.get_ref())
        .await
        .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    let user_id = claims
        .user_id()
        .map_err(actix_web::error::ErrorUnauthorized)?;

    // 2. Upgrade to WebSocket.
    let (response, ws_session, msg_stream) = actix_ws::handle(&req, stream)?;

    // 3. Register with the hub and get a receiver for this connection.
    let rx = hub.connect(user_id).await;

    // 4. Spawn the session task.
    let db_clone = db.get_ref().clone();
    let hub_clone = hub.get_ref().clone();

    actix_web::rt::spawn(session::run(
        ws_session, msg_stream, rx, user_id, db_clone, hub_clone,
    ));

    Ok(response)
}
