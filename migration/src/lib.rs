pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_customer_table;
mod m20260810_000002_create_profile_table;
mod m20260810_000003_create_product_table;
mod m20260810_000004_create_order_table;
mod m20260810_000005_create_order_product_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_customer_table::Migration),
            Box::new(m20260810_000002_create_profile_table::Migration),
            Box::new(m20260810_000003_create_product_table::Migration),
            Box::new(m20260810_000004_create_order_table::Migration),
            Box::new(m20260810_000005_create_order_product_table::Migration),
        ]
    }
}
