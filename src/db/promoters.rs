use sea_orm::*;
use uuid::Uuid;

use crate::models::artists::Tags;
use crate::models::promoters::{self, UpsertPromoterProfile};

/// Insert or update the promoter profile for a user.
pub async fn upsert_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpsertPromoterProfile,
) -> Result<promoters::Model, DbErr> {
    let existing = promoters::Entity::find()
        .filter(promoters::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    match existing {
        Some(profile) => {
            let mut active: promoters::ActiveModel = profile.into();
            active.company_name = Set(input.company_name);
            active.bio = Set(input.bio);
            active.city = Set(input.city);
            active.state = Set(input.state);
            active.website = Set(input.website);
            active.instagram = Set(input.instagram);
            active.image_url = Set(input.image_url);
            active.events_per_year = Set(input.events_per_year);
            active.venue_types = Set(Tags(input.venue_types));
            active.updated_at = Set(Some(chrono::Utc::now()));
            active.update(db).await
        }
        None => {
            let new_profile = promoters::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                company_name: Set(input.company_name),
                bio: Set(input.bio),
                city: Set(input.city),
                state: Set(input.state),
                website: Set(input.website),
                instagram: Set(input.instagram),
                image_url: Set(input.image_url),
                events_per_year: Set(input.events_per_year),
                venue_types: Set(Tags(input.venue_types)),
                created_at: Set(chrono::Utc::now()),
                updated_at: Set(None),
            };
            new_profile.insert(db).await
        }
    }
}

/// Fetch a single promoter profile by its ID.
pub async fn get_profile_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<promoters::Model>, DbErr> {
    promoters::Entity::find_by_id(id).one(db).await
}

/// Fetch the promoter profile belonging to a user.
pub async fn get_profile_by_user_id(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<promoters::Model>, DbErr> {
    promoters::Entity::find()
        .filter(promoters::Column::UserId.eq(user_id))
        .one(db)
        .await
}
