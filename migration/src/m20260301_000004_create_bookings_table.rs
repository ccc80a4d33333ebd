use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
    ArtistId,
    PromoterId,
    EventName,
    EventType,
    EventDate,
    StartTime,
    EndTime,
    VenueName,
    City,
    State,
    ExpectedAttendees,
    BudgetTier,
    Message,
    ContactName,
    ContactEmail,
    Status,
    TotalAmount,
    DepositAmount,
    DeclineReason,
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
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Bookings::ArtistId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::PromoterId).uuid().not_null())
                    .col(ColumnDef::new(Bookings::EventName).string().not_null())
                    .col(ColumnDef::new(Bookings::EventType).string().not_null())
                    .col(ColumnDef::new(Bookings::EventDate).date().not_null())
                    .col(ColumnDef::new(Bookings::StartTime).string().not_null())
                    .col(ColumnDef::new(Bookings::EndTime).string().not_null())
                    .col(ColumnDef::new(Bookings::VenueName).string().not_null())
                    .col(ColumnDef::new(Bookings::City).string().not_null())
                    .col(ColumnDef::new(Bookings::State).string().not_null())
                    .col(
                        ColumnDef::new(Bookings::ExpectedAttendees)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::BudgetTier).string().not_null())
                    .col(ColumnDef::new(Bookings::Message).text())
                    .col(ColumnDef::new(Bookings::ContactName).string().not_null())
                    .col(ColumnDef::new(Bookings::ContactEmail).string().not_null())
                    .col(ColumnDef::new(Bookings::Status).string().not_null())
                    .col(ColumnDef::new(Bookings::TotalAmount).double())
                    .col(ColumnDef::new(Bookings::DepositAmount).double())
                    .col(ColumnDef::new(Bookings::DeclineReason).string())
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_artist_id")
                            .from(Bookings::Table, Bookings::ArtistId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_promoter_id")
                            .from(Bookings::Table, Bookings::PromoterId)
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
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}
