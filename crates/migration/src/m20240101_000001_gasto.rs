//! Creates the `gasto` table.
//!
//! Every column except `id` is nullable: rows written by other tools may
//! leave fields empty and the engine reads them back as defaults.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gasto::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gasto::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gasto::Descripcion).string())
                    .col(ColumnDef::new(Gasto::Monto).double())
                    .col(ColumnDef::new(Gasto::Fecha).string())
                    .col(ColumnDef::new(Gasto::Categoria).string())
                    .col(ColumnDef::new(Gasto::TipoPago).string())
                    .col(ColumnDef::new(Gasto::Comercio).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gasto::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Gasto {
    Table,
    Id,
    Descripcion,
    Monto,
    Fecha,
    Categoria,
    #[iden = "tipoPago"]
    TipoPago,
    Comercio,
}
