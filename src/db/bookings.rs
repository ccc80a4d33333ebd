use sea_orm::*;
use uuid::Uuid;

use crate::models::bookings::{self, CreateBooking, Status};

/// Insert a new booking request (always starts Pending).
pub async fn insert_booking(
    db: &DatabaseConnection,
    input: CreateBooking,
    promoter_id: Uuid,
) -> Result<bookings::Model, DbErr> {
    let new_booking = bookings::ActiveModel {
        id: Set(Uuid::new_v4()),
        artist_id: Set(input.artist_id),
        promoter_id: Set(promoter_id),
        event_name: Set(input.event_name),
        event_type: Set(input.event_type),
        event_date: Set(input.event_date),
        start_time: Set(input.start_time),
        end_time: Set(input.end_time),
        venue_name: Set(input.venue_name),
        city: Set(input.city),
        state: Set(input.state),
        expected_attendees: Set(input.expected_attendees),
        budget_tier: Set(input.budget_tier),
        message: Set(input.message),
        contact_name: Set(input.contact_name),
        contact_email: Set(input.contact_email),
        status: Set(Status::Pending),
        total_amount: Set(None),
        deposit_amount: Set(None),
        decline_reason: Set(None),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_booking.insert(db).await
}

/// Fetch a single booking by ID.
pub async fn get_booking_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<bookings::Model>, DbErr> {
    bookings::Entity::find_by_id(id).one(db).await
}

/// Fetch bookings where the user is either party, newest first, optionally
/// narrowed to one status.
pub async fn get_bookings_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    status: Option<Status>,
) -> Result<Vec<bookings::Model>, DbErr> {
    let mut query = bookings::Entity::find()
        .filter(
            Condition::any()
                .add(bookings::Column::ArtistId.eq(user_id))
                .add(bookings::Column::PromoterId.eq(user_id)),
        )
        .order_by_desc(bookings::Column::CreatedAt);

    if let Some(status) = status {
        query = query.filter(bookings::Column::Status.eq(status));
    }

    query.all(db).await
}

/// Move a booking to a new status. The caller is responsible for having
/// checked the transition table first.
pub async fn update_status(
    db: &DatabaseConnection,
    booking: bookings::Model,
    next: Status,
) -> Result<bookings::Model, DbErr> {
    let mut active: bookings::ActiveModel = booking.into();
    active.status = Set(next);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Confirm a booking and store the artist's quoted terms.
pub async fn confirm_with_terms(
    db: &DatabaseConnection,
    booking: bookings::Model,
    total_amount: f64,
    deposit_amount: f64,
) -> Result<bookings::Model, DbErr> {
    let mut active: bookings::ActiveModel = booking.into();
    active.status = Set(Status::Confirmed);
    active.total_amount = Set(Some(total_amount));
    active.deposit_amount = Set(Some(deposit_amount));
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Decline a booking, recording the artist's optional reason.
pub async fn decline_with_reason(
    db: &DatabaseConnection,
    booking: bookings::Model,
    reason: Option<String>,
) -> Result<bookings::Model, DbErr> {
    let mut active: bookings::ActiveModel = booking.into();
    active.status = Set(Status::Declined);
    active.decline_reason = Set(reason);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}
