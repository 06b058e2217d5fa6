use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer(Order::CustomerId))
                    .col(string_len(Order::Status, 16))
                    .col(
                        timestamp(Order::OrderDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(decimal_len(Order::TotalAmount, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_customer_id")
                            .from(Order::Table, Order::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    CustomerId,
    Status,
    OrderDate,
    TotalAmount,
}
