pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_artist_profiles_table;
mod m20260301_000003_create_promoter_profiles_table;
mod m20260301_000004_create_bookings_table;
mod m20260301_000005_create_contracts_table;
mod m20260301_000006_create_payments_table;
mod m20260302_000001_create_notifications_tables;
mod m20260302_000002_create_plans_and_subscriptions;
mod m20260302_000003_create_favorites_table;
mod m20260315_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_artist_profiles_table::Migration),
            Box::new(m20260301_000003_create_promoter_profiles_table::Migration),
            Box::new(m20260301_000004_create_bookings_table::Migration),
            Box::new(m20260301_000005_create_contracts_table::Migration),
            Box::new(m20260301_000006_create_payments_table::Migration),
            Box::new(m20260302_000001_create_notifications_tables::Migration),
            Box::new(m20260302_000002_create_plans_and_subscriptions::Migration),
            Box::new(m20260302_000003_create_favorites_table::Migration),
            Box::new(m20260315_000001_add_indexes::Migration),
        ]
    }
}
