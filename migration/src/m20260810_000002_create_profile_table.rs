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
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(string(Profile::Address))
                    .col(string(Profile::Phone))
                    .col(string_null(Profile::City))
                    .col(string_null(Profile::State))
                    .col(string_null(Profile::ZipCode))
                    .col(integer_uniq(Profile::CustomerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_customer_id")
                            .from(Profile::Table, Profile::CustomerId)
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
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    Address,
    Phone,
    City,
    State,
    ZipCode,
    CustomerId,
}
