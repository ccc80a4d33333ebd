use sea_orm::*;
use uuid::Uuid;

use crate::models::{artists, favorites};

/// Toggle a favorite row for (promoter, artist profile). Returns the new
/// state: true if the artist is now favorited.
pub async fn toggle_favorite(
    db: &DatabaseConnection,
    promoter_id: Uuid,
    artist_profile_id: Uuid,
) -> Result<bool, DbErr> {
    let existing = favorites::Entity::find()
        .filter(favorites::Column::PromoterId.eq(promoter_id))
        .filter(favorites::Column::ArtistProfileId.eq(artist_profile_id))
        .one(db)
        .await?;

    match existing {
        Some(row) => {
            favorites::Entity::delete_by_id(row.id).exec(db).await?;
            Ok(false)
        }
        None => {
            let new_favorite = favorites::ActiveModel {
                id: Set(Uuid::new_v4()),
                promoter_id: Set(promoter_id),
                artist_profile_id: Set(artist_profile_id),
                created_at: Set(chrono::Utc::now()),
            };
            new_favorite.insert(db).await?;
            Ok(true)
        }
    }
}

/// Fetch the artist profiles a promoter has favorited, most recent first.
pub async fn get_favorite_profiles(
    db: &DatabaseConnection,
    promoter_id: Uuid,
) -> Result<Vec<artists::Model>, DbErr> {
    let rows = favorites::Entity::find()
        .filter(favorites::Column::PromoterId.eq(promoter_id))
        .order_by_desc(favorites::Column::CreatedAt)
        .find_also_related(artists::Entity)
        .all(db)
        .await?;

    Ok(rows.into_iter().filter_map(|(_, profile)| profile).collect())
}
