use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ArtistProfiles {
    Table,
    Id,
    UserId,
    StageName,
    Bio,
    City,
    State,
    Genres,
    Instruments,
    Website,
    Instagram,
    Spotify,
    ImageUrl,
    HourlyRate,
    EventRate,
    DepositPct,
    YearsExperience,
    Available,
    CreatedAt,
    UpdatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
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
                    .table(ArtistProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtistProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArtistProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ArtistProfiles::StageName).string().not_null())
                    .col(ColumnDef::new(ArtistProfiles::Bio).text().not_null())
                    .col(ColumnDef::new(ArtistProfiles::City).string().not_null())
                    .col(ColumnDef::new(ArtistProfiles::State).string().not_null())
                    .col(ColumnDef::new(ArtistProfiles::Genres).json_binary().not_null())
                    .col(
                        ColumnDef::new(ArtistProfiles::Instruments)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtistProfiles::Website).string())
                    .col(ColumnDef::new(ArtistProfiles::Instagram).string())
                    .col(ColumnDef::new(ArtistProfiles::Spotify).string())
                    .col(ColumnDef::new(ArtistProfiles::ImageUrl).string())
                    .col(
                        ColumnDef::new(ArtistProfiles::HourlyRate)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtistProfiles::EventRate).double().not_null())
                    .col(
                        ColumnDef::new(ArtistProfiles::DepositPct)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtistProfiles::YearsExperience)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtistProfiles::Available).boolean().not_null())
                    .col(
                        ColumnDef::new(ArtistProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtistProfiles::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artist_profiles_user_id")
                            .from(ArtistProfiles::Table, ArtistProfiles::UserId)
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
            .drop_table(Table::drop().table(ArtistProfiles::Table).to_owned())
            .await
    }
}
