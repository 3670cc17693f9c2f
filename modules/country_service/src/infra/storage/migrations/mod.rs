//! Database migrations for country service

use sea_orm_migration::prelude::*;

pub struct Migrator;

// Names are written out: every migration shares this file, so a derived name would repeat.

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_countries::Migration),
            Box::new(m20250601_000002_create_hotels::Migration),
        ]
    }
}

mod m20250601_000001_create_countries {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000001_create_countries"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Countries::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Countries::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Countries::Name).string().not_null())
                        .col(ColumnDef::new(Countries::ShortName).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Countries::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Countries {
        Table,
        Id,
        Name,
        ShortName,
    }
}

mod m20250601_000002_create_hotels {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000002_create_hotels"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Hotels::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Hotels::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Hotels::Name).string().not_null())
                        .col(ColumnDef::new(Hotels::Address).string().not_null())
                        .col(ColumnDef::new(Hotels::Rating).double().not_null())
                        .col(ColumnDef::new(Hotels::CountryId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_hotels_country")
                                .from(Hotels::Table, Hotels::CountryId)
                                .to(Countries::Table, Countries::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_hotels_country_id")
                        .table(Hotels::Table)
                        .col(Hotels::CountryId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Hotels::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Hotels {
        Table,
        Id,
        Name,
        Address,
        Rating,
        CountryId,
    }

    #[derive(DeriveIden)]
    enum Countries {
        Table,
        Id,
    }
}
