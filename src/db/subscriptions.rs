use sea_orm::*;
use uuid::Uuid;

use crate::models::subscriptions::{self, ChoosePlan, plans};

/// Fetch every plan, cheapest tier first.
pub async fn get_all_plans(db: &DatabaseConnection) -> Result<Vec<plans::Model>, DbErr> {
    plans::Entity::find()
        .order_by_asc(plans::Column::MonthlyPrice)
        .all(db)
        .await
}

/// Fetch a single plan by ID.
pub async fn get_plan_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<plans::Model>, DbErr> {
    plans::Entity::find_by_id(id).one(db).await
}

/// Choose (or switch) the user's plan — one subscription row per user.
pub async fn upsert_subscription(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: ChoosePlan,
) -> Result<subscriptions::Model, DbErr> {
    let existing = subscriptions::Entity::find()
        .filter(subscriptions::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    match existing {
        Some(subscription) => {
            let mut active: subscriptions::ActiveModel = subscription.into();
            active.plan_id = Set(input.plan_id);
            active.billing = Set(input.billing);
            active.started_at = Set(chrono::Utc::now());
            active.update(db).await
        }
        None => {
            let new_subscription = subscriptions::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                plan_id: Set(input.plan_id),
                billing: Set(input.billing),
                started_at: Set(chrono::Utc::now()),
            };
            new_subscription.insert(db).await
        }
    }
}

/// Fetch the user's current subscription, if any.
pub async fn get_subscription_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<subscriptions::Model>, DbErr> {
    subscriptions::Entity::find()
        .filter(subscriptions::Column::UserId.eq(user_id))
        .one(db)
        .await
}
