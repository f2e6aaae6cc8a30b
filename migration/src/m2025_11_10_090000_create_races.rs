//! Migration to create the races table.
//!
//! Races are grouped by meeting; the meeting id is indexed for the
//! membership filter used by race listings.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Races::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Races::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Races::MeetingId).big_integer().not_null())
                    .col(ColumnDef::new(Races::Name).text().not_null())
                    .col(ColumnDef::new(Races::Number).big_integer().not_null())
                    .col(
                        ColumnDef::new(Races::Visible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Races::AdvertisedStartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_races_meeting_id")
                    .table(Races::Table)
                    .col(Races::MeetingId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_races_meeting_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Races::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Races {
    Table,
    Id,
    MeetingId,
    Name,
    Number,
    Visible,
    AdvertisedStartTime,
}
