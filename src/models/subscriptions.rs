use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscription plan tier, gating commission rate and feature access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Tier {
    #[sea_orm(string_value = "starter")]
    Starter,
    #[sea_orm(string_value = "pro")]
    Pro,
    #[sea_orm(string_value = "elite")]
    Elite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Billing {
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "yearly")]
    Yearly,
}

/// SeaORM entity for the `plans` table.
pub mod plans {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    use super::Tier;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "plans")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        #[sea_orm(unique)]
        pub tier: Tier,
        pub name: String,
        #[sea_orm(column_type = "Double")]
        pub monthly_price: f64,
        #[sea_orm(column_type = "Double")]
        pub yearly_price: f64,
        /// Commission the platform takes on bookings under this plan.
        pub commission_pct: i32,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::Entity")]
        Subscriptions,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Subscriptions.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// SeaORM entity for the `subscriptions` table (one row per user, upserted
/// when the user picks or changes a plan).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub plan_id: Uuid,
    pub billing: Billing,
    pub started_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "plans::Entity",
        from = "Column::PlanId",
        to = "plans::Column::Id"
    )]
    Plan,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/subscriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoosePlan {
    pub plan_id: Uuid,
    pub billing: Billing,
}
