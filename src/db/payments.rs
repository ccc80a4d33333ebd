use sea_orm::*;
use uuid::Uuid;

use crate::models::payments::{self, Kind, Method, Status};

/// Record a completed payment. The transaction id is generated here — this
/// is the seam where a real gateway call would go.
pub async fn insert_completed(
    db: &DatabaseConnection,
    booking_id: Uuid,
    payer_id: Uuid,
    amount: f64,
    kind: Kind,
    method: Method,
) -> Result<payments::Model, DbErr> {
    let new_payment = payments::ActiveModel {
        id: Set(Uuid::new_v4()),
        booking_id: Set(booking_id),
        payer_id: Set(payer_id),
        amount: Set(amount),
        kind: Set(kind),
        status: Set(Status::Completed),
        method: Set(method),
        transaction_id: Set(format!("TXN-{}", Uuid::new_v4().simple())),
        due_date: Set(None),
        created_at: Set(chrono::Utc::now()),
    };

    new_payment.insert(db).await
}

/// Fetch all payments attached to a booking, oldest first.
pub async fn get_payments_by_booking_id(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<Vec<payments::Model>, DbErr> {
    payments::Entity::find()
        .filter(payments::Column::BookingId.eq(booking_id))
        .order_by_asc(payments::Column::CreatedAt)
        .all(db)
        .await
}

/// The kinds of payment already completed for a booking (drives the quote
/// rules: no double charge, no full payment after a deposit).
pub async fn completed_kinds(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<Vec<Kind>, DbErr> {
    let rows = payments::Entity::find()
        .filter(payments::Column::BookingId.eq(booking_id))
        .filter(payments::Column::Status.eq(Status::Completed))
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|p| p.kind).collect())
}

/// Fetch completed payments for a set of bookings (analytics input).
pub async fn get_completed_for_bookings(
    db: &DatabaseConnection,
    booking_ids: Vec<Uuid>,
) -> Result<Vec<payments::Model>, DbErr> {
    if booking_ids.is_empty() {
        return Ok(Vec::new());
    }
    payments::Entity::find()
        .filter(payments::Column::BookingId.is_in(booking_ids))
        .filter(payments::Column::Status.eq(Status::Completed))
        .all(db)
        .await
}
