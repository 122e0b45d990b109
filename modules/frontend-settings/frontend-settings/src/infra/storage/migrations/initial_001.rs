use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DataSource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DataSource::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DataSource::OrgId).big_integer().not_null())
                    .col(ColumnDef::new(DataSource::Version).integer().not_null())
                    .col(ColumnDef::new(DataSource::Type).string().not_null())
                    .col(ColumnDef::new(DataSource::Name).string().not_null())
                    .col(ColumnDef::new(DataSource::Access).string().not_null())
                    .col(ColumnDef::new(DataSource::Url).string().not_null())
                    .col(ColumnDef::new(DataSource::Password).string().not_null())
                    .col(ColumnDef::new(DataSource::User).string().not_null())
                    .col(ColumnDef::new(DataSource::Database).string().not_null())
                    .col(ColumnDef::new(DataSource::BasicAuth).boolean().not_null())
                    .col(ColumnDef::new(DataSource::BasicAuthUser).string().not_null())
                    .col(ColumnDef::new(DataSource::BasicAuthPassword).string().not_null())
                    .col(ColumnDef::new(DataSource::WithCredentials).boolean().not_null())
                    .col(ColumnDef::new(DataSource::IsDefault).boolean().not_null())
                    .col(ColumnDef::new(DataSource::JsonData).json())
                    .col(ColumnDef::new(DataSource::Created).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(DataSource::Updated).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("UQE_data_source_org_id_name")
                    .table(DataSource::Table)
                    .col(DataSource::OrgId)
                    .col(DataSource::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DataSource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DataSource {
    Table,
    Id,
    OrgId,
    Version,
    Type,
    Name,
    Access,
    Url,
    Password,
    User,
    Database,
    BasicAuth,
    BasicAuthUser,
    BasicAuthPassword,
    WithCredentials,
    IsDefault,
    JsonData,
    Created,
    Updated,
}
