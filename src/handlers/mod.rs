pub mod analytics;
pub mod artists;
pub mod auth;
pub mod bookings;
pub mod contracts;
pub mod events;
pub mod notifications;
pub mod payments;
pub mod promoters;
pub mod subscriptions;

use actix_web::web;
use sea_orm::DatabaseConnection;

use crate::db::notifications as notification_db;
use crate::events::hub::NotificationHub;
use crate::events::protocol::ServerEvent;
use crate::models::notifications::CreateNotification;

/// Persist a notification and push it to the recipient's live connections.
/// Failures are logged, never surfaced — a lost side-effect notification
/// must not fail the lifecycle operation that triggered it.
pub(crate) async fn notify(
    db: &DatabaseConnection,
    hub: &NotificationHub,
    input: CreateNotification,
) {
    match notification_db::insert_notification(db, input).await {
        Ok(n) => hub.publish(n.user_id, ServerEvent::from_notification(&n)).await,
        Err(e) => tracing::warn!("Failed to persist notification: {e}"),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(
        web::scope("/auth")
            .route("/me", web::get().to(auth::me))
            .route("/complete-profile", web::post().to(auth::complete_profile)),
    );

    // ── Artist gallery + profiles ──
    cfg.service(
        web::scope("/artists")
            .route("", web::get().to(artists::list_artists))
            .route("", web::post().to(artists::upsert_profile))
            .route("/me", web::get().to(artists::get_own_profile))
            .route("/{id}", web::get().to(artists::get_artist))
            .route("/{id}/favorite", web::post().to(artists::toggle_favorite)),
    );
    cfg.service(web::resource("/favorites").route(web::get().to(artists::get_favorites)));

    // ── Promoter profiles ──
    cfg.service(
        web::scope("/promoters")
            .route("", web::post().to(promoters::upsert_profile))
            .route("/me", web::get().to(promoters::get_own_profile))
            .route("/{id}", web::get().to(promoters::get_promoter)),
    );

    // ── Booking lifecycle ──
    cfg.service(
        web::scope("/bookings")
            .route("", web::get().to(bookings::get_bookings))
            .route("", web::post().to(bookings::create_booking))
            .route("/{id}", web::get().to(bookings::get_booking))
            .route("/{id}/accept", web::put().to(bookings::accept_booking))
            .route("/{id}/decline", web::put().to(bookings::decline_booking))
            .route("/{id}/cancel", web::put().to(bookings::cancel_booking))
            .route("/{id}/complete", web::put().to(bookings::complete_booking)),
    );

    // ── Contract lifecycle ──
    cfg.service(
        web::scope("/contracts")
            .route("", web::get().to(contracts::get_contracts))
            .route("", web::post().to(contracts::create_contract))
            .route("/{id}", web::get().to(contracts::get_contract))
            .route("/{id}/send", web::post().to(contracts::send_contract))
            .route("/{id}/sign", web::post().to(contracts::sign_contract)),
    );

    // ── Payments ──
    cfg.service(
        web::scope("/payments")
            .route("", web::post().to(payments::submit_payment))
            .route("/quote", web::post().to(payments::quote))
            .route(
                "/booking/{booking_id}",
                web::get().to(payments::get_payments_for_booking),
            ),
    );

    // ── Analytics ──
    cfg.service(web::resource("/analytics").route(web::get().to(analytics::get_analytics)));

    // ── Notifications ──
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(notifications::get_notifications))
            .route("/settings", web::get().to(notifications::get_settings))
            .route("/settings", web::put().to(notifications::update_settings))
            .route("/read-all", web::put().to(notifications::mark_all_read))
            .route("/{id}/read", web::put().to(notifications::mark_read))
            .route("/{id}", web::delete().to(notifications::delete_notification)),
    );

    // ── Realtime event channel ──
    cfg.service(web::resource("/events/ws").route(web::get().to(events::ws_connect)));

    // ── Subscription plans ──
    cfg.service(web::resource("/plans").route(web::get().to(subscriptions::get_plans)));
    cfg.service(
        web::scope("/subscriptions")
            .route("", web::post().to(subscriptions::choose_plan))
            .route("/me", web::get().to(subscriptions::get_own_subscription)),
    );
}
