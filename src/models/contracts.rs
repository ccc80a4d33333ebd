use chrono::{Days, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of days a sent contract stays open for signatures.
pub const SIGNING_WINDOW_DAYS: u64 = 30;

/// Contract status stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "sent")]
    Sent,
    #[sea_orm(string_value = "signed")]
    Signed,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "expired")]
    Expired,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Draft => "draft",
            Status::Sent => "sent",
            Status::Signed => "signed",
            Status::Completed => "completed",
            Status::Expired => "expired",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Template {
    #[sea_orm(string_value = "standard")]
    Standard,
    #[sea_orm(string_value = "festival")]
    Festival,
    #[sea_orm(string_value = "private_event")]
    PrivateEvent,
}

/// The two signatories of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    Artist,
    Promoter,
}

/// Errors raised by the contract signature workflow.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ContractError {
    #[error("contract is {0}; only draft contracts can be sent")]
    NotDraft(Status),
    #[error("contract is {0}; only sent contracts can be signed")]
    NotSigningOpen(Status),
    #[error("{0:?} has already signed this contract")]
    AlreadySigned(Party),
}

/// SeaORM entity for the `contracts` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub booking_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub template: Template,
    pub status: Status,
    pub artist_signed: bool,
    pub promoter_signed: bool,
    pub created_at: DateTimeUtc,
    pub sent_at: Option<DateTimeUtc>,
    pub signed_at: Option<DateTimeUtc>,
    pub expires_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bookings::Entity",
        from = "Column::BookingId",
        to = "super::bookings::Column::Id"
    )]
    Booking,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The field changes produced by a lifecycle step, applied to the row by
/// the caller. Keeping the rules here keeps them unit-testable without a
/// database.
#[derive(Debug, Clone, PartialEq)]
pub struct Signing {
    pub status: Status,
    pub artist_signed: bool,
    pub promoter_signed: bool,
    pub signed_at: Option<DateTimeUtc>,
}

impl Model {
    /// draft → sent. Stamps the send time and opens the 30-day signing window.
    pub fn prepare_send(&self, now: DateTimeUtc) -> Result<(DateTimeUtc, DateTimeUtc), ContractError> {
        if self.status != Status::Draft {
            return Err(ContractError::NotDraft(self.status));
        }
        let expires_at = now + Days::new(SIGNING_WINDOW_DAYS);
        Ok((now, expires_at))
    }

    /// Record one party's signature.
    ///
    /// Either party may sign first; the status flips to `signed` only on
    /// the signature that makes both flags true, and `signed_at` is stamped
    /// at that moment exactly once.
    pub fn apply_signature(&self, party: Party, now: DateTimeUtc) -> Result<Signing, ContractError> {
        if self.status != Status::Sent {
            return Err(ContractError::NotSigningOpen(self.status));
        }

        let already = match party {
            Party::Artist => self.artist_signed,
            Party::Promoter => self.promoter_signed,
        };
        if already {
            return Err(ContractError::AlreadySigned(party));
        }

        let artist_signed = self.artist_signed || party == Party::Artist;
        let promoter_signed = self.promoter_signed || party == Party::Promoter;
        let fully_signed = artist_signed && promoter_signed;

        Ok(Signing {
            status: if fully_signed { Status::Signed } else { Status::Sent },
            artist_signed,
            promoter_signed,
            signed_at: fully_signed.then_some(now),
        })
    }

    /// Whether this contract's signing window has lapsed. Checked lazily on
    /// every read, since there is no background sweep.
    pub fn expiry_due(&self, now: DateTimeUtc) -> bool {
        self.status == Status::Sent && self.expires_at.is_some_and(|e| e < now)
    }
}

// ── DTOs ──

/// Request body for POST /api/contracts.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContract {
    pub booking_id: Uuid,
    pub template: Template,
    /// Defaults to the booking's quoted total when omitted.
    pub amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(status: Status, artist_signed: bool, promoter_signed: bool) -> Model {
        Model {
            id: Uuid::new_v4(),
            booking_id: Uuid::new_v4(),
            amount: 5000.0,
            template: Template::Standard,
            status,
            artist_signed,
            promoter_signed,
            created_at: Utc::now(),
            sent_at: None,
            signed_at: None,
            expires_at: None,
        }
    }

    #[test]
    fn sending_a_draft_opens_a_30_day_window() {
        let c = contract(Status::Draft, false, false);
        let now = Utc::now();
        let (sent_at, expires_at) = c.prepare_send(now).unwrap();
        assert_eq!(sent_at, now);
        assert_eq!(expires_at, now + Days::new(30));
    }

    #[test]
    fn only_drafts_can_be_sent() {
        for status in [Status::Sent, Status::Signed, Status::Completed, Status::Expired] {
            let c = contract(status, false, false);
            assert_eq!(c.prepare_send(Utc::now()).unwrap_err(), ContractError::NotDraft(status));
        }
    }

    #[test]
    fn first_signature_keeps_status_sent() {
        let c = contract(Status::Sent, false, false);
        let signing = c.apply_signature(Party::Artist, Utc::now()).unwrap();
        assert_eq!(signing.status, Status::Sent);
        assert!(signing.artist_signed);
        assert!(!signing.promoter_signed);
        assert!(signing.signed_at.is_none());
    }

    #[test]
    fn second_signature_flips_to_signed_and_stamps_once() {
        let now = Utc::now();
        let c = contract(Status::Sent, true, false);
        let signing = c.apply_signature(Party::Promoter, now).unwrap();
        assert_eq!(signing.status, Status::Signed);
        assert!(signing.artist_signed && signing.promoter_signed);
        assert_eq!(signing.signed_at, Some(now));
    }

    #[test]
    fn signing_order_does_not_matter() {
        let now = Utc::now();
        let c = contract(Status::Sent, false, true);
        let signing = c.apply_signature(Party::Artist, now).unwrap();
        assert_eq!(signing.status, Status::Signed);
        assert_eq!(signing.signed_at, Some(now));
    }

    #[test]
    fn double_signing_is_rejected() {
        let c = contract(Status::Sent, true, false);
        assert_eq!(
            c.apply_signature(Party::Artist, Utc::now()).unwrap_err(),
            ContractError::AlreadySigned(Party::Artist)
        );
    }

    #[test]
    fn drafts_cannot_be_signed() {
        let c = contract(Status::Draft, false, false);
        assert_eq!(
            c.apply_signature(Party::Artist, Utc::now()).unwrap_err(),
            ContractError::NotSigningOpen(Status::Draft)
        );
    }

    #[test]
    fn signed_implies_both_flags() {
        // The only path to Signed is apply_signature, which requires both
        // flags; spot-check the invariant over every outcome it can produce.
        let now = Utc::now();
        for (artist, promoter) in [(false, false), (true, false), (false, true)] {
            let c = contract(Status::Sent, artist, promoter);
            for party in [Party::Artist, Party::Promoter] {
                if let Ok(signing) = c.apply_signature(party, now) {
                    assert_eq!(
                        signing.status == Status::Signed,
                        signing.artist_signed && signing.promoter_signed
                    );
                }
            }
        }
    }

    #[test]
    fn expiry_is_due_only_for_lapsed_sent_contracts() {
        let now = Utc::now();
        let mut c = contract(Status::Sent, false, false);
        c.expires_at = Some(now - Days::new(1));
        assert!(c.expiry_due(now));

        c.expires_at = Some(now + Days::new(1));
        assert!(!c.expiry_due(now));

        let mut signed = contract(Status::Signed, true, true);
        signed.expires_at = Some(now - Days::new(1));
        assert!(!signed.expiry_due(now));
    }
}
