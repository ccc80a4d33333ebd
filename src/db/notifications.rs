use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::notifications::{self, CreateNotification, settings};

/// Persist a new notification for a user.
pub async fn insert_notification(
    db: &DatabaseConnection,
    input: CreateNotification,
) -> Result<notifications::Model, DbErr> {
    let new_notification = notifications::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(input.user_id),
        kind: Set(input.kind),
        title: Set(input.title),
        body: Set(input.body),
        priority: Set(input.kind.priority()),
        booking_id: Set(input.booking_id),
        read: Set(false),
        created_at: Set(chrono::Utc::now()),
    };

    new_notification.insert(db).await
}

/// Fetch a user's notifications, newest first.
pub async fn get_notifications_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    unread_only: bool,
) -> Result<Vec<notifications::Model>, DbErr> {
    let mut query = notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .order_by_desc(notifications::Column::CreatedAt);

    if unread_only {
        query = query.filter(notifications::Column::Read.eq(false));
    }

    query.all(db).await
}

/// Fetch a single notification by ID.
pub async fn get_notification_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<notifications::Model>, DbErr> {
    notifications::Entity::find_by_id(id).one(db).await
}

/// Mark one notification as read.
pub async fn mark_read(
    db: &DatabaseConnection,
    notification: notifications::Model,
) -> Result<notifications::Model, DbErr> {
    let mut active: notifications::ActiveModel = notification.into();
    active.read = Set(true);
    active.update(db).await
}

/// Mark every unread notification for a user as read. Returns the number
/// of rows touched.
pub async fn mark_all_read(db: &DatabaseConnection, user_id: Uuid) -> Result<u64, DbErr> {
    let result = notifications::Entity::update_many()
        .col_expr(notifications::Column::Read, Expr::value(true))
        .filter(notifications::Column::UserId.eq(user_id))
        .filter(notifications::Column::Read.eq(false))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Delete a notification by ID.
pub async fn delete_notification(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<DeleteResult, DbErr> {
    notifications::Entity::delete_by_id(id).exec(db).await
}

/// Fetch a user's notification settings, creating defaults on first access.
pub async fn get_or_create_settings(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<settings::Model, DbErr> {
    if let Some(existing) = settings::Entity::find_by_id(user_id).one(db).await? {
        return Ok(existing);
    }

    let defaults = settings::ActiveModel {
        user_id: Set(user_id),
        email_bookings: Set(true),
        email_contracts: Set(true),
        email_payments: Set(true),
        push_enabled: Set(true),
        updated_at: Set(None),
    };

    defaults.insert(db).await
}

/// Apply a partial settings update.
pub async fn update_settings(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: settings::UpdateSettings,
) -> Result<settings::Model, DbErr> {
    let current = get_or_create_settings(db, user_id).await?;
    let mut active: settings::ActiveModel = current.into();

    if let Some(v) = input.email_bookings {
        active.email_bookings = Set(v);
    }
    if let Some(v) = input.email_contracts {
        active.email_contracts = Set(v);
    }
    if let Some(v) = input.email_payments {
        active.email_payments = Set(v);
    }
    if let Some(v) = input.push_enabled {
        active.push_enabled = Set(v);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
