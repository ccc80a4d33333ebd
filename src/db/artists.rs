use sea_orm::*;
use uuid::Uuid;

use crate::models::artists::{self, Tags, UpsertArtistProfile};

/// Insert or update the artist profile for a user (the wizard is re-runnable).
pub async fn upsert_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
    input: UpsertArtistProfile,
) -> Result<artists::Model, DbErr> {
    let existing = artists::Entity::find()
        .filter(artists::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    match existing {
        Some(profile) => {
            let mut active: artists::ActiveModel = profile.into();
            active.stage_name = Set(input.stage_name);
            active.bio = Set(input.bio);
            active.city = Set(input.city);
            active.state = Set(input.state);
            active.genres = Set(Tags(input.genres));
            active.instruments = Set(Tags(input.instruments));
            active.website = Set(input.website);
            active.instagram = Set(input.instagram);
            active.spotify = Set(input.spotify);
            active.image_url = Set(input.image_url);
            active.hourly_rate = Set(input.hourly_rate);
            active.event_rate = Set(input.event_rate);
            active.deposit_pct = Set(input.deposit_pct);
            active.years_experience = Set(input.years_experience);
            if let Some(available) = input.available {
                active.available = Set(available);
            }
            active.updated_at = Set(Some(chrono::Utc::now()));
            active.update(db).await
        }
        None => {
            let new_profile = artists::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                stage_name: Set(input.stage_name),
                bio: Set(input.bio),
                city: Set(input.city),
                state: Set(input.state),
                genres: Set(Tags(input.genres)),
                instruments: Set(Tags(input.instruments)),
                website: Set(input.website),
                instagram: Set(input.instagram),
                spotify: Set(input.spotify),
                image_url: Set(input.image_url),
                hourly_rate: Set(input.hourly_rate),
                event_rate: Set(input.event_rate),
                deposit_pct: Set(input.deposit_pct),
                years_experience: Set(input.years_experience),
                available: Set(input.available.unwrap_or(true)),
                created_at: Set(chrono::Utc::now()),
                updated_at: Set(None),
            };
            new_profile.insert(db).await
        }
    }
}

/// Fetch a single artist profile by its ID.
pub async fn get_profile_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<artists::Model>, DbErr> {
    artists::Entity::find_by_id(id).one(db).await
}

/// Fetch the artist profile belonging to a user.
pub async fn get_profile_by_user_id(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Option<artists::Model>, DbErr> {
    artists::Entity::find()
        .filter(artists::Column::UserId.eq(user_id))
        .one(db)
        .await
}

/// Fetch every profile currently open for bookings, newest first. The
/// gallery's search/genre/sort refinement happens in `gallery::refine`.
pub async fn get_available_profiles(
    db: &DatabaseConnection,
) -> Result<Vec<artists::Model>, DbErr> {
    artists::Entity::find()
        .filter(artists::Column::Available.eq(true))
        .order_by_desc(artists::Column::CreatedAt)
        .all(db)
        .await
}
