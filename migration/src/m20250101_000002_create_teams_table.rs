use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Teams::Table)
                .if_not_exists()
                .col(ColumnDef::new(Teams::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Teams::Name).string().not_null())
                .col(ColumnDef::new(Teams::Description).string().null())
                .col(ColumnDef::new(Teams::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Teams::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Teams::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Teams {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
