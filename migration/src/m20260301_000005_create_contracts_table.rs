use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    BookingId,
    Amount,
    Template,
    Status,
    ArtistSigned,
    PromoterSigned,
    CreatedAt,
    SentAt,
    SignedAt,
    ExpiresAt,
}

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contracts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contracts::BookingId).uuid().not_null())
                    .col(ColumnDef::new(Contracts::Amount).double().not_null())
                    .col(ColumnDef::new(Contracts::Template).string().not_null())
                    .col(ColumnDef::new(Contracts::Status).string().not_null())
                    .col(ColumnDef::new(Contracts::ArtistSigned).boolean().not_null())
                    .col(
                        ColumnDef::new(Contracts::PromoterSigned)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contracts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Contracts::SentAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Contracts::SignedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Contracts::ExpiresAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_booking_id")
                            .from(Contracts::Table, Contracts::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await
    }
}
