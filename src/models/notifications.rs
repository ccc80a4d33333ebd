use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Kind {
    #[sea_orm(string_value = "booking_request")]
    BookingRequest,
    #[sea_orm(string_value = "booking_confirmed")]
    BookingConfirmed,
    #[sea_orm(string_value = "booking_declined")]
    BookingDeclined,
    #[sea_orm(string_value = "booking_cancelled")]
    BookingCancelled,
    #[sea_orm(string_value = "booking_completed")]
    BookingCompleted,
    #[sea_orm(string_value = "contract_sent")]
    ContractSent,
    #[sea_orm(string_value = "contract_signed")]
    ContractSigned,
    #[sea_orm(string_value = "payment_received")]
    PaymentReceived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Priority {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}

impl Kind {
    /// Default priority per notification kind, mirroring how urgently each
    /// event needs the recipient's attention.
    pub fn priority(self) -> Priority {
        match self {
            Kind::BookingRequest | Kind::ContractSent => Priority::High,
            Kind::BookingConfirmed
            | Kind::BookingDeclined
            | Kind::BookingCancelled
            | Kind::ContractSigned
            | Kind::PaymentReceived => Priority::Medium,
            Kind::BookingCompleted => Priority::Low,
        }
    }
}

/// SeaORM entity for the `notifications` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: Kind,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub priority: Priority,
    pub booking_id: Option<Uuid>,
    pub read: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// SeaORM entity for the `notification_settings` table (one row per user).
pub mod settings {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "notification_settings")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub user_id: Uuid,
        pub email_bookings: bool,
        pub email_contracts: bool,
        pub email_payments: bool,
        pub push_enabled: bool,
        pub updated_at: Option<DateTimeUtc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    /// Request body for PUT /api/notifications/settings. Every field is
    /// optional so the client can flip a single toggle.
    #[derive(Debug, Clone, Deserialize)]
    pub struct UpdateSettings {
        pub email_bookings: Option<bool>,
        pub email_contracts: Option<bool>,
        pub email_payments: Option<bool>,
        pub push_enabled: Option<bool>,
    }
}

// ── DTOs ──

/// Parameters for creating a notification (built by handlers as a side
/// effect of lifecycle changes, then persisted and pushed over WebSocket).
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: Uuid,
    pub kind: Kind,
    pub title: String,
    pub body: String,
    pub booking_id: Option<Uuid>,
}

/// Query params for GET /api/notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationQuery {
    pub unread_only: Option<bool>,
}
