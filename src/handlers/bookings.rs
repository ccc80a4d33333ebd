use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::authorization::{verify_booking_party, verify_booking_role};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::artists as artist_db;
use crate::db::bookings as booking_db;
use crate::db::contracts as contract_db;
use crate::events::hub::NotificationHub;
use crate::handlers::notify;
use crate::models::bookings::{
    AcceptBooking, BookingListQuery, CreateBooking, DeclineBooking, Status,
};
use crate::models::contracts::Party;
use crate::models::notifications::{CreateNotification, Kind};

/// POST /api/bookings — a promoter submits a booking request to an artist.
///
/// The request form is re-validated server-side; the artist must have a
/// profile that is currently open for bookings. New requests always start
/// Pending, and the artist is notified.
pub async fn create_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    body: web::Json<CreateBooking>,
) -> impl Responder {
    let input = body.into_inner();

    if let Err(errors) = input.validate(chrono::Utc::now().date_naive()) {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid booking request",
            "details": errors,
        }));
    }

    if input.artist_id == user.0.id {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "You cannot book yourself",
        }));
    }

    // The target must be an artist with a profile open for bookings.
    match artist_db::get_profile_by_user_id(db.get_ref(), input.artist_id).await {
        Ok(Some(profile)) if profile.available => {}
        Ok(Some(_)) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "This artist is not currently accepting bookings",
            }));
        }
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Artist {} not found", input.artist_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    let artist_id = input.artist_id;
    match booking_db::insert_booking(db.get_ref(), input, user.0.id).await {
        Ok(booking) => {
            notify(
                db.get_ref(),
                hub.get_ref(),
                CreateNotification {
                    user_id: artist_id,
                    kind: Kind::BookingRequest,
                    title: "New booking request".to_string(),
                    body: format!(
                        "{} at {} on {}",
                        booking.event_name, booking.venue_name, booking.event_date
                    ),
                    booking_id: Some(booking.id),
                },
            )
            .await;
            HttpResponse::Created().json(booking)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create booking: {e}"),
        })),
    }
}

/// GET /api/bookings — list the caller's bookings (as either party),
/// optionally filtered by ?status=.
pub async fn get_bookings(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<BookingListQuery>,
) -> impl Responder {
    match booking_db::get_bookings_for_user(db.get_ref(), user.0.id, query.status).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/bookings/{id} — a single booking, parties only.
pub async fn get_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match verify_booking_party(db.get_ref(), path.into_inner(), user.0.id).await {
        Ok((booking, _)) => HttpResponse::Ok().json(booking),
        Err(resp) => resp,
    }
}

/// PUT /api/bookings/{id}/accept — the artist confirms a pending booking
/// with their quoted terms (total and required deposit).
pub async fn accept_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    path: web::Path<Uuid>,
    body: web::Json<AcceptBooking>,
) -> impl Responder {
    let terms = body.into_inner();
    if let Err(e) = terms.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }

    let booking =
        match verify_booking_role(db.get_ref(), path.into_inner(), user.0.id, Party::Artist).await {
            Ok(b) => b,
            Err(resp) => return resp,
        };

    if let Err(e) = booking.check_transition(Status::Confirmed) {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }));
    }

    match booking_db::confirm_with_terms(
        db.get_ref(),
        booking,
        terms.total_amount,
        terms.deposit_amount,
    )
    .await
    {
        Ok(updated) => {
            notify(
                db.get_ref(),
                hub.get_ref(),
                CreateNotification {
                    user_id: updated.promoter_id,
                    kind: Kind::BookingConfirmed,
                    title: "Booking confirmed".to_string(),
                    body: format!("{} is confirmed", updated.event_name),
                    booking_id: Some(updated.id),
                },
            )
            .await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to accept booking: {e}"),
        })),
    }
}

/// PUT /api/bookings/{id}/decline — the artist turns down a pending request.
pub async fn decline_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    path: web::Path<Uuid>,
    body: web::Json<DeclineBooking>,
) -> impl Responder {
    let booking =
        match verify_booking_role(db.get_ref(), path.into_inner(), user.0.id, Party::Artist).await {
            Ok(b) => b,
            Err(resp) => return resp,
        };

    if let Err(e) = booking.check_transition(Status::Declined) {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }));
    }

    match booking_db::decline_with_reason(db.get_ref(), booking, body.into_inner().reason).await {
        Ok(updated) => {
            notify(
                db.get_ref(),
                hub.get_ref(),
                CreateNotification {
                    user_id: updated.promoter_id,
                    kind: Kind::BookingDeclined,
                    title: "Booking declined".to_string(),
                    body: format!("{} was declined by the artist", updated.event_name),
                    booking_id: Some(updated.id),
                },
            )
            .await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to decline booking: {e}"),
        })),
    }
}

/// PUT /api/bookings/{id}/cancel — the promoter withdraws a pending request
/// or cancels a confirmed booking before the event.
pub async fn cancel_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let booking = match verify_booking_role(
        db.get_ref(),
        path.into_inner(),
        user.0.id,
        Party::Promoter,
    )
    .await
    {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    if let Err(e) = booking.check_transition(Status::Cancelled) {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }));
    }

    match booking_db::update_status(db.get_ref(), booking, Status::Cancelled).await {
        Ok(updated) => {
            notify(
                db.get_ref(),
                hub.get_ref(),
                CreateNotification {
                    user_id: updated.artist_id,
                    kind: Kind::BookingCancelled,
                    title: "Booking cancelled".to_string(),
                    body: format!("{} was cancelled by the promoter", updated.event_name),
                    booking_id: Some(updated.id),
                },
            )
            .await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to cancel booking: {e}"),
        })),
    }
}

/// PUT /api/bookings/{id}/complete — the artist marks a confirmed booking
/// done once the event date has passed. Any signed contract on the booking
/// completes with it.
pub async fn complete_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let booking =
        match verify_booking_role(db.get_ref(), path.into_inner(), user.0.id, Party::Artist).await {
            Ok(b) => b,
            Err(resp) => return resp,
        };

    if let Err(e) = booking.check_completable(chrono::Utc::now().date_naive()) {
        return HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }));
    }

    let updated = match booking_db::update_status(db.get_ref(), booking, Status::Completed).await {
        Ok(b) => b,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to complete booking: {e}"),
            }));
        }
    };

    if let Err(e) = contract_db::complete_signed_for_booking(db.get_ref(), updated.id).await {
        tracing::warn!("Failed to complete contracts for booking {}: {e}", updated.id);
    }

    notify(
        db.get_ref(),
        hub.get_ref(),
        CreateNotification {
            user_id: updated.promoter_id,
            kind: Kind::BookingCompleted,
            title: "Booking completed".to_string(),
            body: format!("{} is marked completed", updated.event_name),
            booking_id: Some(updated.id),
        },
    )
    .await;

    HttpResponse::Ok().json(updated)
}
