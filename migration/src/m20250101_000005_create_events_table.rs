use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // project_id and created_by stay unconstrained.
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::StartTime).date_time().not_null())
                    .col(ColumnDef::new(Events::EndTime).date_time().null())
                    .col(ColumnDef::new(Events::AllDay).boolean().not_null().default(false))
                    .col(ColumnDef::new(Events::Category).string().null())
                    .col(ColumnDef::new(Events::Description).text().null())
                    .col(ColumnDef::new(Events::Status).string().null())
                    .col(ColumnDef::new(Events::ProjectId).uuid().null())
                    .col(ColumnDef::new(Events::CreatedBy).uuid().null())
                    .col(ColumnDef::new(Events::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Events::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Events::Table)
                    .if_exists()
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    StartTime,
    EndTime,
    AllDay,
    Category,
    Description,
    Status,
    ProjectId,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
