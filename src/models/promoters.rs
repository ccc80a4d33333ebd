use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::artists::Tags;

/// SeaORM entity for the `promoter_profiles` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "promoter_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub company_name: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub city: String,
    pub state: String,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub image_url: Option<String>,
    pub events_per_year: i32,
    pub venue_types: Tags,
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
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// The promoter setup wizard payload, validated like the artist wizard.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPromoterProfile {
    pub company_name: String,
    pub bio: String,
    pub city: String,
    pub state: String,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub image_url: Option<String>,
    pub events_per_year: i32,
    pub venue_types: Vec<String>,
}

impl UpsertPromoterProfile {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        // Step 1: identity
        if self.company_name.trim().is_empty() {
            errors.push("company_name is required".to_string());
        }
        if self.city.trim().is_empty() {
            errors.push("city is required".to_string());
        }
        if self.state.trim().is_empty() {
            errors.push("state is required".to_string());
        }

        // Step 2: event details
        if self.events_per_year < 0 {
            errors.push("events_per_year cannot be negative".to_string());
        }
        if self.venue_types.iter().all(|v| v.trim().is_empty()) {
            errors.push("at least one venue type is required".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_company_name_is_rejected() {
        let p = UpsertPromoterProfile {
            company_name: String::new(),
            bio: String::new(),
            city: "Denver".to_string(),
            state: "CO".to_string(),
            website: None,
            instagram: None,
            image_url: None,
            events_per_year: 12,
            venue_types: vec!["club".to_string()],
        };
        let errors = p.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("company_name")));
    }
}
