use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Booking status stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "declined")]
    Declined,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Declined => "declined",
            Status::Cancelled => "cancelled",
            Status::Completed => "completed",
        };
        f.write_str(s)
    }
}

impl Status {
    /// The exhaustive transition table for the booking lifecycle.
    ///
    /// `pending` can be accepted, declined, or withdrawn; a `confirmed`
    /// booking can still be cancelled by the promoter or completed by the
    /// artist after the event. Everything else is terminal.
    pub fn can_transition(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Status::Pending, Status::Confirmed)
                | (Status::Pending, Status::Declined)
                | (Status::Pending, Status::Cancelled)
                | (Status::Confirmed, Status::Cancelled)
                | (Status::Confirmed, Status::Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Status::Declined | Status::Cancelled | Status::Completed
        )
    }
}

/// Errors raised by the booking lifecycle rules.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LifecycleError {
    #[error("booking is {current}; cannot move to {requested}")]
    InvalidTransition { current: Status, requested: Status },
    #[error("booking cannot be completed before the event date")]
    EventNotOver,
    #[error("deposit_amount must be positive and no greater than total_amount")]
    InvalidTerms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EventType {
    #[sea_orm(string_value = "concert")]
    Concert,
    #[sea_orm(string_value = "festival")]
    Festival,
    #[sea_orm(string_value = "private_party")]
    PrivateParty,
    #[sea_orm(string_value = "corporate")]
    Corporate,
    #[sea_orm(string_value = "club_night")]
    ClubNight,
    #[sea_orm(string_value = "wedding")]
    Wedding,
    #[sea_orm(string_value = "other")]
    Other,
}

/// SeaORM entity for the `bookings` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub artist_id: Uuid,
    pub promoter_id: Uuid,
    pub event_name: String,
    pub event_type: EventType,
    pub event_date: Date,
    pub start_time: String,
    pub end_time: String,
    pub venue_name: String,
    pub city: String,
    pub state: String,
    pub expected_attendees: i32,
    /// Budget bracket the promoter selected, e.g. "1000-2500".
    pub budget_tier: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub status: Status,
    #[sea_orm(column_type = "Double", nullable)]
    pub total_amount: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub deposit_amount: Option<f64>,
    pub decline_reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ArtistId",
        to = "super::users::Column::Id"
    )]
    Artist,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::PromoterId",
        to = "super::users::Column::Id"
    )]
    Promoter,
    #[sea_orm(has_many = "super::contracts::Entity")]
    Contracts,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Check a requested status change against the transition table.
    pub fn check_transition(&self, next: Status) -> Result<(), LifecycleError> {
        if self.status.can_transition(next) {
            Ok(())
        } else {
            Err(LifecycleError::InvalidTransition {
                current: self.status,
                requested: next,
            })
        }
    }

    /// Completion is only allowed once the event date has passed (or is today).
    pub fn check_completable(&self, today: NaiveDate) -> Result<(), LifecycleError> {
        self.check_transition(Status::Completed)?;
        if self.event_date > today {
            return Err(LifecycleError::EventNotOver);
        }
        Ok(())
    }
}

// ── DTOs ──

/// Request body for POST /api/bookings (the promoter's booking request form).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub artist_id: Uuid,
    pub event_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub venue_name: String,
    pub city: String,
    pub state: String,
    pub expected_attendees: i32,
    pub budget_tier: String,
    pub message: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
}

impl CreateBooking {
    /// Server-side equivalent of the form's required-field checks, plus the
    /// constraints the form never enforced (attendees > 0, date not past).
    pub fn validate(&self, today: NaiveDate) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (value, field) in [
            (&self.event_name, "event_name"),
            (&self.start_time, "start_time"),
            (&self.end_time, "end_time"),
            (&self.venue_name, "venue_name"),
            (&self.city, "city"),
            (&self.state, "state"),
            (&self.budget_tier, "budget_tier"),
            (&self.contact_name, "contact_name"),
            (&self.contact_email, "contact_email"),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{field} is required"));
            }
        }

        if self.expected_attendees <= 0 {
            errors.push("expected_attendees must be positive".to_string());
        }
        if self.event_date < today {
            errors.push("event_date cannot be in the past".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Request body for PUT /api/bookings/{id}/accept — the artist's quoted terms.
#[derive(Debug, Clone, Deserialize)]
pub struct AcceptBooking {
    pub total_amount: f64,
    pub deposit_amount: f64,
}

impl AcceptBooking {
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.total_amount <= 0.0
            || self.deposit_amount <= 0.0
            || self.deposit_amount > self.total_amount
        {
            return Err(LifecycleError::InvalidTerms);
        }
        Ok(())
    }
}

/// Request body for PUT /api/bookings/{id}/decline.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclineBooking {
    pub reason: Option<String>,
}

/// Query params for GET /api/bookings.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<Status>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn booking(status: Status, event_date: NaiveDate) -> Model {
        Model {
            id: Uuid::new_v4(),
            artist_id: Uuid::new_v4(),
            promoter_id: Uuid::new_v4(),
            event_name: "Test Show".to_string(),
            event_type: EventType::Concert,
            event_date,
            start_time: "19:00".to_string(),
            end_time: "23:00".to_string(),
            venue_name: "The Paramount".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            expected_attendees: 250,
            budget_tier: "1000-2500".to_string(),
            message: None,
            contact_name: "Jordan Reyes".to_string(),
            contact_email: "jordan@example.com".to_string(),
            status,
            total_amount: None,
            deposit_amount: None,
            decline_reason: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn tomorrow() -> NaiveDate {
        Utc::now().date_naive() + chrono::Days::new(1)
    }

    #[test]
    fn pending_can_be_confirmed_or_declined_or_cancelled() {
        assert!(Status::Pending.can_transition(Status::Confirmed));
        assert!(Status::Pending.can_transition(Status::Declined));
        assert!(Status::Pending.can_transition(Status::Cancelled));
        assert!(!Status::Pending.can_transition(Status::Completed));
    }

    #[test]
    fn terminal_states_admit_no_transitions() {
        for from in [Status::Declined, Status::Cancelled, Status::Completed] {
            for to in [
                Status::Pending,
                Status::Confirmed,
                Status::Declined,
                Status::Cancelled,
                Status::Completed,
            ] {
                assert!(!from.can_transition(to), "{from} -> {to} should be rejected");
            }
            assert!(from.is_terminal());
        }
    }

    #[test]
    fn confirmed_cannot_go_back_to_pending() {
        let b = booking(Status::Confirmed, tomorrow());
        let err = b.check_transition(Status::Pending).unwrap_err();
        assert_eq!(
            err,
            LifecycleError::InvalidTransition {
                current: Status::Confirmed,
                requested: Status::Pending,
            }
        );
    }

    #[test]
    fn completion_requires_the_event_to_be_over() {
        let today = Utc::now().date_naive();
        let future = booking(Status::Confirmed, tomorrow());
        assert_eq!(
            future.check_completable(today).unwrap_err(),
            LifecycleError::EventNotOver
        );

        let past = booking(Status::Confirmed, today - chrono::Days::new(1));
        assert!(past.check_completable(today).is_ok());
    }

    #[test]
    fn new_request_validates_and_starts_pending() {
        let req = CreateBooking {
            artist_id: Uuid::new_v4(),
            event_name: "Test Show".to_string(),
            event_type: EventType::Concert,
            event_date: tomorrow(),
            start_time: "19:00".to_string(),
            end_time: "23:00".to_string(),
            venue_name: "The Paramount".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            expected_attendees: 250,
            budget_tier: "1000-2500".to_string(),
            message: None,
            contact_name: "Jordan Reyes".to_string(),
            contact_email: "jordan@example.com".to_string(),
        };
        assert!(req.validate(Utc::now().date_naive()).is_ok());
    }

    #[test]
    fn past_event_date_and_missing_fields_are_rejected() {
        let req = CreateBooking {
            artist_id: Uuid::new_v4(),
            event_name: String::new(),
            event_type: EventType::Festival,
            event_date: Utc::now().date_naive() - chrono::Days::new(2),
            start_time: "19:00".to_string(),
            end_time: "23:00".to_string(),
            venue_name: "Lot B".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            expected_attendees: 0,
            budget_tier: "1000-2500".to_string(),
            message: None,
            contact_name: "Jordan Reyes".to_string(),
            contact_email: "jordan@example.com".to_string(),
        };
        let errors = req.validate(Utc::now().date_naive()).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("event_name")));
        assert!(errors.iter().any(|e| e.contains("expected_attendees")));
        assert!(errors.iter().any(|e| e.contains("event_date")));
    }

    #[test]
    fn accept_terms_require_deposit_within_total() {
        assert!(
            AcceptBooking { total_amount: 5000.0, deposit_amount: 1250.0 }
                .validate()
                .is_ok()
        );
        assert!(
            AcceptBooking { total_amount: 5000.0, deposit_amount: 6000.0 }
                .validate()
                .is_err()
        );
        assert!(
            AcceptBooking { total_amount: 0.0, deposit_amount: 0.0 }
                .validate()
                .is_err()
        );
    }
}
