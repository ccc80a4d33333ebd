use actix_web::HttpResponse;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::bookings as booking_db;
use crate::models::bookings::Model as Booking;
use crate::models::contracts::Party;

/// Which side of a booking the caller is on.
pub fn booking_party(booking: &Booking, user_id: Uuid) -> Option<Party> {
    if booking.artist_id == user_id {
        Some(Party::Artist)
    } else if booking.promoter_id == user_id {
        Some(Party::Promoter)
    } else {
        None
    }
}

/// Fetch a booking and verify the caller is one of its two parties.
/// Returns the booking and the caller's side.
pub async fn verify_booking_party(
    db: &DatabaseConnection,
    booking_id: Uuid,
    user_id: Uuid,
) -> Result<(Booking, Party), HttpResponse> {
    let booking = booking_db::get_booking_by_id(db, booking_id)
        .await
        .map_err(|e| {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }))
        })?
        .ok_or_else(|| {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Booking {booking_id} not found"),
            }))
        })?;

    let party = booking_party(&booking, user_id).ok_or_else(|| {
        HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not a party to this booking",
        }))
    })?;

    Ok((booking, party))
}

/// Like `verify_booking_party`, but requires a specific side.
pub async fn verify_booking_role(
    db: &DatabaseConnection,
    booking_id: Uuid,
    user_id: Uuid,
    required: Party,
) -> Result<Booking, HttpResponse> {
    let (booking, party) = verify_booking_party(db, booking_id, user_id).await?;
    if party != required {
        let side = match required {
            Party::Artist => "the booked artist",
            Party::Promoter => "the promoter who requested the booking",
        };
        return Err(HttpResponse::Forbidden().json(serde_json::json!({
            "error": format!("Only {side} can perform this action"),
        })));
    }
    Ok(booking)
}
