use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::promoters as promoter_db;
use crate::models::promoters::UpsertPromoterProfile;

/// POST /api/promoters — create or update the caller's promoter profile.
pub async fn upsert_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpsertPromoterProfile>,
) -> impl Responder {
    let input = body.into_inner();

    if let Err(errors) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid profile",
            "details": errors,
        }));
    }

    match promoter_db::upsert_profile(db.get_ref(), user.0.id, input).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save profile: {e}"),
        })),
    }
}

/// GET /api/promoters/me — the caller's own promoter profile (404 means
/// "show the setup wizard").
pub async fn get_own_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match promoter_db::get_profile_by_user_id(db.get_ref(), user.0.id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No promoter profile yet",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/promoters/{id} — a single promoter profile.
pub async fn get_promoter(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match promoter_db::get_profile_by_id(db.get_ref(), id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Promoter profile {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
