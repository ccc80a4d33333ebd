use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Bookings {
    Table,
    ArtistId,
    PromoterId,
    Status,
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    BookingId,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    BookingId,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum ArtistProfiles {
    Table,
    Available,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on bookings.artist_id for the artist's booking list
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_artist_id")
                    .table(Bookings::Table)
                    .col(Bookings::ArtistId)
                    .to_owned(),
            )
            .await?;

        // Index on bookings.promoter_id for the promoter's booking list
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_promoter_id")
                    .table(Bookings::Table)
                    .col(Bookings::PromoterId)
                    .to_owned(),
            )
            .await?;

        // Index on bookings.status for filtered list queries
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await?;

        // Index on contracts.booking_id for fetching a booking's contracts
        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_booking_id")
                    .table(Contracts::Table)
                    .col(Contracts::BookingId)
                    .to_owned(),
            )
            .await?;

        // Index on payments.booking_id for fetching a booking's payments
        manager
            .create_index(
                Index::create()
                    .name("idx_payments_booking_id")
                    .table(Payments::Table)
                    .col(Payments::BookingId)
                    .to_owned(),
            )
            .await?;

        // Index on notifications.user_id for the per-user feed
        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on artist_profiles.available for gallery queries
        manager
            .create_index(
                Index::create()
                    .name("idx_artist_profiles_available")
                    .table(ArtistProfiles::Table)
                    .col(ArtistProfiles::Available)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_bookings_artist_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bookings_promoter_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bookings_status").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contracts_booking_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_payments_booking_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_notifications_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_artist_profiles_available").to_owned())
            .await?;

        Ok(())
    }
}
