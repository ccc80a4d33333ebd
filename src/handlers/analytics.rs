use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::analytics;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::bookings as booking_db;
use crate::db::payments as payment_db;

/// GET /api/analytics — dashboard figures over the caller's bookings and
/// the completed payments attached to them.
pub async fn get_analytics(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let bookings = match booking_db::get_bookings_for_user(db.get_ref(), user.0.id, None).await {
        Ok(b) => b,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let booking_ids: Vec<Uuid> = bookings.iter().map(|b| b.id).collect();
    let payments = match payment_db::get_completed_for_bookings(db.get_ref(), booking_ids).await {
        Ok(p) => p,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    HttpResponse::Ok().json(analytics::compute(&bookings, &payments))
}
