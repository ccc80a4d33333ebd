use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{RedisCache, keys};
use crate::db::artists as artist_db;
use crate::db::favorites as favorite_db;
use crate::gallery;
use crate::models::artists::{ArtistListQuery, UpsertArtistProfile};

/// GET /api/artists — the gallery listing: search/filter/sort/paginate over
/// available artists, cached per filter signature.
pub async fn list_artists(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    query: web::Query<ArtistListQuery>,
) -> impl Responder {
    let cache_key = keys::artist_list(&query.cache_signature());

    if let Ok(Some(cached)) = cache.get::<serde_json::Value>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    match artist_db::get_available_profiles(db.get_ref()).await {
        Ok(profiles) => {
            let page = gallery::refine(profiles, &query);
            // 2 minute TTL — the gallery tolerates slightly stale data.
            let _ = cache.set(&cache_key, &page, Some(120)).await;
            HttpResponse::Ok().json(page)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch artists: {e}"),
        })),
    }
}

/// GET /api/artists/{id} — a single artist profile, cached.
pub async fn get_artist(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let cache_key = keys::artist(&id.to_string());

    if let Ok(Some(cached)) = cache.get::<serde_json::Value>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    match artist_db::get_profile_by_id(db.get_ref(), id).await {
        Ok(Some(profile)) => {
            let _ = cache.set(&cache_key, &profile, Some(900)).await;
            HttpResponse::Ok().json(profile)
        }
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Artist profile {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/artists/me — the caller's own artist profile.
///
/// A missing profile is the normal "not created yet" branch, not a failure;
/// the client shows the setup wizard on 404.
pub async fn get_own_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match artist_db::get_profile_by_user_id(db.get_ref(), user.0.id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No artist profile yet",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/artists — create or update the caller's artist profile (the
/// setup wizard submits its whole state here).
pub async fn upsert_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    body: web::Json<UpsertArtistProfile>,
) -> impl Responder {
    let input = body.into_inner();

    if let Err(errors) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid profile",
            "details": errors,
        }));
    }

    match artist_db::upsert_profile(db.get_ref(), user.0.id, input).await {
        Ok(profile) => {
            // Drop stale gallery pages and the profile's own cache entry.
            let _ = cache.delete_pattern(keys::artist_list_pattern()).await;
            let _ = cache.delete(&keys::artist(&profile.id.to_string())).await;
            HttpResponse::Ok().json(profile)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save profile: {e}"),
        })),
    }
}

/// POST /api/artists/{id}/favorite — toggle the caller's favorite flag for
/// an artist profile.
pub async fn toggle_favorite(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let artist_profile_id = path.into_inner();

    // Verify the profile exists before writing a join row.
    match artist_db::get_profile_by_id(db.get_ref(), artist_profile_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Artist profile {artist_profile_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match favorite_db::toggle_favorite(db.get_ref(), user.0.id, artist_profile_id).await {
        Ok(favorited) => HttpResponse::Ok().json(serde_json::json!({
            "artist_profile_id": artist_profile_id,
            "favorited": favorited,
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to toggle favorite: {e}"),
        })),
    }
}

/// GET /api/favorites — the artist profiles the caller has favorited.
pub async fn get_favorites(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match favorite_db::get_favorite_profiles(db.get_ref(), user.0.id).await {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
