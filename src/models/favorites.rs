use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `favorites` join table (promoter ↔ artist profile).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub promoter_id: Uuid,
    pub artist_profile_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::PromoterId",
        to = "super::users::Column::Id"
    )]
    Promoter,
    #[sea_orm(
        belongs_to = "super::artists::Entity",
        from = "Column::ArtistProfileId",
        to = "super::artists::Column::Id"
    )]
    ArtistProfile,
}

impl Related<super::artists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
