use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000003_create_product_table::Product, m20260810_000004_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderProduct::Table)
                    .if_not_exists()
                    .col(integer(OrderProduct::OrderId))
                    .col(integer(OrderProduct::ProductId))
                    .primary_key(
                        Index::create()
                            .name("pk_order_product")
                            .col(OrderProduct::OrderId)
                            .col(OrderProduct::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_order_id")
                            .from(OrderProduct::Table, OrderProduct::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_product_product_id")
                            .from(OrderProduct::Table, OrderProduct::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderProduct {
    #[sea_orm(iden = "order_product")]
    Table,
    OrderId,
    ProductId,
}
