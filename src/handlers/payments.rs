use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::auth::authorization::{verify_booking_party, verify_booking_role};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::payments as payment_db;
use crate::events::hub::NotificationHub;
use crate::handlers::notify;
use crate::models::bookings::{Model as Booking, Status as BookingStatus};
use crate::models::contracts::Party;
use crate::models::notifications::{CreateNotification, Kind};
use crate::models::payments::{QuoteRequest, QuoteResponse, SubmitPayment, quote_amount};

/// The booking must be confirmed with agreed terms before money moves.
fn terms_of(booking: &Booking) -> Result<(f64, f64), HttpResponse> {
    if booking.status != BookingStatus::Confirmed {
        return Err(HttpResponse::Conflict().json(serde_json::json!({
            "error": "Payments are only taken on confirmed bookings",
        })));
    }
    match (booking.total_amount, booking.deposit_amount) {
        (Some(total), Some(deposit)) => Ok((total, deposit)),
        _ => Err(HttpResponse::Conflict().json(serde_json::json!({
            "error": "Booking has no agreed financial terms yet",
        }))),
    }
}

/// POST /api/payments/quote — compute what a given payment kind would cost
/// for a booking, without charging anything.
pub async fn quote(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<QuoteRequest>,
) -> impl Responder {
    let input = body.into_inner();

    let booking = match verify_booking_role(
        db.get_ref(),
        input.booking_id,
        user.0.id,
        Party::Promoter,
    )
    .await
    {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let (total, deposit) = match terms_of(&booking) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let completed = match payment_db::completed_kinds(db.get_ref(), booking.id).await {
        Ok(kinds) => kinds,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    match quote_amount(input.kind, total, deposit, &completed) {
        Ok(amount) => HttpResponse::Ok().json(QuoteResponse {
            booking_id: booking.id,
            kind: input.kind,
            amount,
        }),
        Err(e) => HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// POST /api/payments — the promoter pays for a booking.
///
/// Charges the server-computed amount for the requested kind and records
/// the payment as completed with a generated transaction id. This is the
/// seam where a real gateway integration belongs.
pub async fn submit_payment(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    hub: web::Data<Arc<NotificationHub>>,
    body: web::Json<SubmitPayment>,
) -> impl Responder {
    let input = body.into_inner();

    let booking = match verify_booking_role(
        db.get_ref(),
        input.booking_id,
        user.0.id,
        Party::Promoter,
    )
    .await
    {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    let (total, deposit) = match terms_of(&booking) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let completed = match payment_db::completed_kinds(db.get_ref(), booking.id).await {
        Ok(kinds) => kinds,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let amount = match quote_amount(input.kind, total, deposit, &completed) {
        Ok(a) => a,
        Err(e) => {
            return HttpResponse::Conflict().json(serde_json::json!({ "error": e.to_string() }));
        }
    };

    match payment_db::insert_completed(
        db.get_ref(),
        booking.id,
        user.0.id,
        amount,
        input.kind,
        input.method,
    )
    .await
    {
        Ok(payment) => {
            notify(
                db.get_ref(),
                hub.get_ref(),
                CreateNotification {
                    user_id: booking.artist_id,
                    kind: Kind::PaymentReceived,
                    title: "Payment received".to_string(),
                    body: format!("${:.2} received for {}", payment.amount, booking.event_name),
                    booking_id: Some(booking.id),
                },
            )
            .await;
            HttpResponse::Created().json(payment)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to record payment: {e}"),
        })),
    }
}

/// GET /api/payments/booking/{booking_id} — payment history for a booking,
/// parties only.
pub async fn get_payments_for_booking(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<uuid::Uuid>,
) -> impl Responder {
    let booking = match verify_booking_party(db.get_ref(), path.into_inner(), user.0.id).await {
        Ok((b, _)) => b,
        Err(resp) => return resp,
    };

    match payment_db::get_payments_by_booking_id(db.get_ref(), booking.id).await {
        Ok(payments) => HttpResponse::Ok().json(payments),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}
