use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A JSON-backed list of strings (genres, instruments, venue types).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Tags(pub Vec<String>);

/// SeaORM entity for the `artist_profiles` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artist_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub stage_name: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub city: String,
    pub state: String,
    pub genres: Tags,
    pub instruments: Tags,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub spotify: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub hourly_rate: f64,
    #[sea_orm(column_type = "Double")]
    pub event_rate: f64,
    /// Deposit required to secure a booking, as a percentage of the quoted total.
    pub deposit_pct: i32,
    pub years_experience: i32,
    pub available: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// The full artist setup wizard payload, submitted as one struct.
///
/// The SPA collects this over several steps; the server re-validates the
/// same steps with `validate()` before the upsert.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertArtistProfile {
    pub stage_name: String,
    pub bio: String,
    pub city: String,
    pub state: String,
    pub genres: Vec<String>,
    pub instruments: Vec<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub spotify: Option<String>,
    pub image_url: Option<String>,
    pub hourly_rate: f64,
    pub event_rate: f64,
    pub deposit_pct: i32,
    pub years_experience: i32,
    pub available: Option<bool>,
}

impl UpsertArtistProfile {
    /// Per-step validation of the wizard payload. Returns every failed
    /// check so the client can surface all of them at once.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        // Step 1: identity
        if self.stage_name.trim().is_empty() {
            errors.push("stage_name is required".to_string());
        }
        if self.city.trim().is_empty() {
            errors.push("city is required".to_string());
        }
        if self.state.trim().is_empty() {
            errors.push("state is required".to_string());
        }

        // Step 2: musical details
        if self.genres.iter().all(|g| g.trim().is_empty()) {
            errors.push("at least one genre is required".to_string());
        }
        if self.years_experience < 0 {
            errors.push("years_experience cannot be negative".to_string());
        }

        // Step 3: pricing
        if self.hourly_rate < 0.0 {
            errors.push("hourly_rate cannot be negative".to_string());
        }
        if self.event_rate < 0.0 {
            errors.push("event_rate cannot be negative".to_string());
        }
        if !(0..=100).contains(&self.deposit_pct) {
            errors.push("deposit_pct must be between 0 and 100".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Query params for the artist gallery listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistListQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub city: Option<String>,
    pub sort: Option<GallerySort>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GallerySort {
    Newest,
    Name,
    Rate,
}

impl ArtistListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(20).min(100)
    }

    /// Stable signature for cache keys: one string per active filter.
    pub fn cache_signature(&self) -> String {
        format!(
            "{}:{}:{}:{:?}:{}:{}",
            self.search.as_deref().unwrap_or(""),
            self.genre.as_deref().unwrap_or(""),
            self.city.as_deref().unwrap_or(""),
            self.sort,
            self.page(),
            self.limit(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> UpsertArtistProfile {
        UpsertArtistProfile {
            stage_name: "The Midnight Echo".to_string(),
            bio: "Indie rock four-piece.".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            genres: vec!["indie".to_string(), "rock".to_string()],
            instruments: vec!["guitar".to_string()],
            website: None,
            instagram: None,
            spotify: None,
            image_url: None,
            hourly_rate: 150.0,
            event_rate: 1200.0,
            deposit_pct: 25,
            years_experience: 6,
            available: Some(true),
        }
    }

    #[test]
    fn valid_wizard_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn empty_identity_fields_are_all_reported() {
        let mut p = valid_payload();
        p.stage_name = "  ".to_string();
        p.city = String::new();
        let errors = p.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("stage_name"));
    }

    #[test]
    fn deposit_pct_out_of_range_is_rejected() {
        let mut p = valid_payload();
        p.deposit_pct = 120;
        assert!(p.validate().is_err());
    }

    #[test]
    fn blank_genres_are_rejected() {
        let mut p = valid_payload();
        p.genres = vec!["".to_string(), " ".to_string()];
        assert!(p.validate().is_err());
    }
}
