use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discount multiplier applied when a promoter pays the full amount up front.
pub const FULL_PAYMENT_MULTIPLIER: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Kind {
    #[sea_orm(string_value = "deposit")]
    Deposit,
    #[sea_orm(string_value = "full")]
    Full,
    #[sea_orm(string_value = "balance")]
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "refunded")]
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Method {
    #[sea_orm(string_value = "card")]
    Card,
    #[sea_orm(string_value = "paypal")]
    Paypal,
    #[sea_orm(string_value = "bank")]
    Bank,
}

/// Errors raised by the payment amount rules.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PaymentError {
    #[error("booking has no agreed financial terms yet")]
    NoTerms,
    #[error("a {0:?} payment has already been completed for this booking")]
    AlreadyPaid(Kind),
    #[error("balance payments require a completed deposit")]
    DepositNotPaid,
    #[error("full payment is unavailable once a deposit has been paid")]
    FullAfterDeposit,
}

/// SeaORM entity for the `payments` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub booking_id: Uuid,
    pub payer_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub kind: Kind,
    pub status: Status,
    pub method: Method,
    pub transaction_id: String,
    pub due_date: Option<Date>,
    pub created_at: DateTimeUtc,
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

/// Compute the chargeable amount for a payment kind against the booking's
/// agreed terms.
///
/// `full` earns the 5% pay-up-front discount on the original total and is
/// only offered before any deposit has been taken; once a deposit has
/// completed, the remainder is an undiscounted `balance`.
pub fn quote_amount(
    kind: Kind,
    total_amount: f64,
    deposit_amount: f64,
    completed: &[Kind],
) -> Result<f64, PaymentError> {
    if completed.contains(&kind) {
        return Err(PaymentError::AlreadyPaid(kind));
    }

    match kind {
        Kind::Deposit => {
            if completed.contains(&Kind::Full) {
                return Err(PaymentError::AlreadyPaid(Kind::Full));
            }
            Ok(deposit_amount)
        }
        Kind::Full => {
            if completed.contains(&Kind::Deposit) {
                return Err(PaymentError::FullAfterDeposit);
            }
            Ok(total_amount * FULL_PAYMENT_MULTIPLIER)
        }
        Kind::Balance => {
            if !completed.contains(&Kind::Deposit) {
                return Err(PaymentError::DepositNotPaid);
            }
            Ok(total_amount - deposit_amount)
        }
    }
}

// ── DTOs ──

/// Request body for POST /api/payments/quote.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub booking_id: Uuid,
    pub kind: Kind,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub booking_id: Uuid,
    pub kind: Kind,
    pub amount: f64,
}

/// Request body for POST /api/payments.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitPayment {
    pub booking_id: Uuid,
    pub kind: Kind,
    pub method: Method,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payment_gets_the_five_percent_discount() {
        let amount = quote_amount(Kind::Full, 5000.0, 1250.0, &[]).unwrap();
        assert!((amount - 4750.0).abs() < f64::EPSILON);
    }

    #[test]
    fn deposit_is_the_configured_amount_exactly() {
        let amount = quote_amount(Kind::Deposit, 5000.0, 1250.0, &[]).unwrap();
        assert_eq!(amount, 1250.0);
    }

    #[test]
    fn balance_is_the_undiscounted_remainder() {
        let amount = quote_amount(Kind::Balance, 5000.0, 1250.0, &[Kind::Deposit]).unwrap();
        assert_eq!(amount, 3750.0);
    }

    #[test]
    fn balance_requires_a_completed_deposit() {
        assert_eq!(
            quote_amount(Kind::Balance, 5000.0, 1250.0, &[]).unwrap_err(),
            PaymentError::DepositNotPaid
        );
    }

    #[test]
    fn full_is_unavailable_after_a_deposit() {
        assert_eq!(
            quote_amount(Kind::Full, 5000.0, 1250.0, &[Kind::Deposit]).unwrap_err(),
            PaymentError::FullAfterDeposit
        );
    }

    #[test]
    fn nothing_can_be_paid_twice() {
        assert_eq!(
            quote_amount(Kind::Deposit, 5000.0, 1250.0, &[Kind::Deposit]).unwrap_err(),
            PaymentError::AlreadyPaid(Kind::Deposit)
        );
        assert_eq!(
            quote_amount(Kind::Full, 5000.0, 1250.0, &[Kind::Full]).unwrap_err(),
            PaymentError::AlreadyPaid(Kind::Full)
        );
    }
}
