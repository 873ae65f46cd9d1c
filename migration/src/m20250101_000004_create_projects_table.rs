use sea_orm_migration::prelude::*;

use crate::m20250101_000002_create_teams_table::Teams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Name,
    Description,
    Status,
    DueDate,
    OwnerId,
    TeamId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Projects::Table)
                .if_not_exists()
                .col(ColumnDef::new(Projects::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Projects::Name).string().not_null())
                .col(ColumnDef::new(Projects::Description).text().null())
                .col(ColumnDef::new(Projects::Status).string().null())
                .col(ColumnDef::new(Projects::DueDate).date().null())
                .col(ColumnDef::new(Projects::OwnerId).uuid().null())
                .col(ColumnDef::new(Projects::TeamId).uuid().null())
                .col(ColumnDef::new(Projects::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Projects::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_projects_team")
                        .from(Projects::Table, Projects::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_projects_team_id")
                .table(Projects::Table)
                .col(Projects::TeamId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Projects::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
