use sea_orm::*;
use uuid::Uuid;

use crate::models::contracts::{self, Signing, Status, Template};

/// Insert a new contract (starts as a Draft).
pub async fn insert_contract(
    db: &DatabaseConnection,
    booking_id: Uuid,
    template: Template,
    amount: f64,
) -> Result<contracts::Model, DbErr> {
    let new_contract = contracts::ActiveModel {
        id: Set(Uuid::new_v4()),
        booking_id: Set(booking_id),
        amount: Set(amount),
        template: Set(template),
        status: Set(Status::Draft),
        artist_signed: Set(false),
        promoter_signed: Set(false),
        created_at: Set(chrono::Utc::now()),
        sent_at: Set(None),
        signed_at: Set(None),
        expires_at: Set(None),
    };

    new_contract.insert(db).await
}

/// Fetch a single contract by ID.
pub async fn get_contract_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<contracts::Model>, DbErr> {
    contracts::Entity::find_by_id(id).one(db).await
}

/// Fetch all contracts attached to a booking.
pub async fn get_contracts_by_booking_id(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<Vec<contracts::Model>, DbErr> {
    contracts::Entity::find()
        .filter(contracts::Column::BookingId.eq(booking_id))
        .order_by_desc(contracts::Column::CreatedAt)
        .all(db)
        .await
}

/// Fetch contracts for a set of bookings (used to list "my contracts").
pub async fn get_contracts_for_bookings(
    db: &DatabaseConnection,
    booking_ids: Vec<Uuid>,
) -> Result<Vec<contracts::Model>, DbErr> {
    if booking_ids.is_empty() {
        return Ok(Vec::new());
    }
    contracts::Entity::find()
        .filter(contracts::Column::BookingId.is_in(booking_ids))
        .order_by_desc(contracts::Column::CreatedAt)
        .all(db)
        .await
}

/// Mark a draft as sent, stamping the send time and expiry.
pub async fn mark_sent(
    db: &DatabaseConnection,
    contract: contracts::Model,
    sent_at: chrono::DateTime<chrono::Utc>,
    expires_at: chrono::DateTime<chrono::Utc>,
) -> Result<contracts::Model, DbErr> {
    let mut active: contracts::ActiveModel = contract.into();
    active.status = Set(Status::Sent);
    active.sent_at = Set(Some(sent_at));
    active.expires_at = Set(Some(expires_at));
    active.update(db).await
}

/// Persist the outcome of a signature step.
pub async fn apply_signing(
    db: &DatabaseConnection,
    contract: contracts::Model,
    signing: Signing,
) -> Result<contracts::Model, DbErr> {
    let mut active: contracts::ActiveModel = contract.into();
    active.status = Set(signing.status);
    active.artist_signed = Set(signing.artist_signed);
    active.promoter_signed = Set(signing.promoter_signed);
    if signing.signed_at.is_some() {
        active.signed_at = Set(signing.signed_at);
    }
    active.update(db).await
}

/// Lazy expiry: if the signing window has lapsed on a Sent contract,
/// persist the Expired status before handing the row back.
pub async fn expire_if_due(
    db: &DatabaseConnection,
    contract: contracts::Model,
) -> Result<contracts::Model, DbErr> {
    if !contract.expiry_due(chrono::Utc::now()) {
        return Ok(contract);
    }
    let mut active: contracts::ActiveModel = contract.into();
    active.status = Set(Status::Expired);
    active.update(db).await
}

/// Mark any signed contract on the booking as completed (called when the
/// booking itself completes).
pub async fn complete_signed_for_booking(
    db: &DatabaseConnection,
    booking_id: Uuid,
) -> Result<(), DbErr> {
    let signed = contracts::Entity::find()
        .filter(contracts::Column::BookingId.eq(booking_id))
        .filter(contracts::Column::Status.eq(Status::Signed))
        .all(db)
        .await?;

    for contract in signed {
        let mut active: contracts::ActiveModel = contract.into();
        active.status = Set(Status::Completed);
        active.update(db).await?;
    }
    Ok(())
}
