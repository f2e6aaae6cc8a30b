//! Migration to create the events table.
//!
//! Sporting events carry a category id plus free-form division, country and
//! location columns. The category id is indexed for membership filtering.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::Name).text().not_null())
                    .col(ColumnDef::new(Events::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Events::Division).text().not_null())
                    .col(ColumnDef::new(Events::Country).text().not_null())
                    .col(ColumnDef::new(Events::Location).text().not_null())
                    .col(
                        ColumnDef::new(Events::AdvertisedStartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::Visible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_category_id")
                    .table(Events::Table)
                    .col(Events::CategoryId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_events_category_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Name,
    CategoryId,
    Division,
    Country,
    Location,
    AdvertisedStartTime,
    Visible,
}
