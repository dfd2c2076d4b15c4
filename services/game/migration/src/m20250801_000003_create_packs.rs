use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Packs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packs::Tid).string().not_null().primary_key())
                    .col(ColumnDef::new(Packs::Name).string().not_null())
                    .col(
                        ColumnDef::new(Packs::Cost)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Packs::CardsPerPack)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(ColumnDef::new(Packs::Rarities).json_binary().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Packs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Packs {
    Table,
    Tid,
    Name,
    Cost,
    CardsPerPack,
    Rarities,
}
