use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PromoterProfiles {
    Table,
    Id,
    UserId,
    CompanyName,
    Bio,
    City,
    State,
    Website,
    Instagram,
    ImageUrl,
    EventsPerYear,
    VenueTypes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromoterProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromoterProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PromoterProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PromoterProfiles::CompanyName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PromoterProfiles::Bio).text().not_null())
                    .col(ColumnDef::new(PromoterProfiles::City).string().not_null())
                    .col(ColumnDef::new(PromoterProfiles::State).string().not_null())
                    .col(ColumnDef::new(PromoterProfiles::Website).string())
                    .col(ColumnDef::new(PromoterProfiles::Instagram).string())
                    .col(ColumnDef::new(PromoterProfiles::ImageUrl).string())
                    .col(
                        ColumnDef::new(PromoterProfiles::EventsPerYear)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromoterProfiles::VenueTypes)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromoterProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PromoterProfiles::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promoter_profiles_user_id")
                            .from(PromoterProfiles::Table, PromoterProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromoterProfiles::Table).to_owned())
            .await
    }
}
