use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{RedisCache, keys};
use crate::db::subscriptions as subscription_db;
use crate::models::subscriptions::ChoosePlan;

/// GET /api/plans — the plan tiers, cheapest first. The list changes
/// rarely, so it is cached aggressively.
pub async fn get_plans(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
) -> impl Responder {
    let cache_key = keys::plans();

    if let Ok(Some(cached)) = cache.get::<serde_json::Value>(cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    match subscription_db::get_all_plans(db.get_ref()).await {
        Ok(plans) => {
            let _ = cache.set(cache_key, &plans, Some(3600)).await;
            HttpResponse::Ok().json(plans)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/subscriptions — choose or switch the caller's plan.
pub async fn choose_plan(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<ChoosePlan>,
) -> impl Responder {
    let input = body.into_inner();

    // The plan must exist before the upsert.
    match subscription_db::get_plan_by_id(db.get_ref(), input.plan_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Plan {} not found", input.plan_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match subscription_db::upsert_subscription(db.get_ref(), user.0.id, input).await {
        Ok(subscription) => HttpResponse::Ok().json(subscription),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save subscription: {e}"),
        })),
    }
}

/// GET /api/subscriptions/me — the caller's current subscription, if any.
pub async fn get_own_subscription(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match subscription_db::get_subscription_for_user(db.get_ref(), user.0.id).await {
        Ok(Some(subscription)) => HttpResponse::Ok().json(subscription),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No subscription yet",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
