use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users_table::Users;
use crate::m20250101_000002_create_teams_table::Teams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum TeamMembers {
    Table,
    TeamId,
    UserId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline; SQLite cannot add them with ALTER TABLE.
        m.create_table(
            Table::create()
                .table(TeamMembers::Table)
                .if_not_exists()
                .col(ColumnDef::new(TeamMembers::TeamId).uuid().not_null())
                .col(ColumnDef::new(TeamMembers::UserId).uuid().not_null())
                .col(ColumnDef::new(TeamMembers::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_team_members")
                        .col(TeamMembers::TeamId)
                        .col(TeamMembers::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_members_team")
                        .from(TeamMembers::Table, TeamMembers::TeamId)
                        .to(Teams::Table, Teams::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_members_user")
                        .from(TeamMembers::Table, TeamMembers::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_team_members_user")
                .table(TeamMembers::Table)
                .col(TeamMembers::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(TeamMembers::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
