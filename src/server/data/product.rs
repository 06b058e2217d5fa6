use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        price: Decimal,
        description: Option<String>,
    ) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(name),
            price: ActiveValue::Set(price),
            description: ActiveValue::Set(description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Fetches the products for the given ids. The result may be shorter
    /// than the input when some ids do not exist; callers decide whether
    /// that is an error.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::product::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Case-insensitive substring match on name.
    pub async fn find_by_name_containing(
        &self,
        name: &str,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(
                Func::lower(Expr::col(entity::product::Column::Name))
                    .like(format!("%{}%", name.to_lowercase())),
            )
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Inclusive price range query.
    pub async fn find_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Price.between(min_price, max_price))
            .order_by_asc(entity::product::Column::Price)
            .all(self.db)
            .await
    }

    /// # Returns
    /// - `Ok(Some(Model))`: The updated product
    /// - `Ok(None)`: Product not found
    pub async fn update(
        &self,
        id: i32,
        name: String,
        price: Decimal,
        description: Option<String>,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = product.into();
        active.name = ActiveValue::Set(name);
        active.price = ActiveValue::Set(price);
        active.description = ActiveValue::Set(description);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a product and its order associations in one transaction.
    /// Totals of orders that referenced the product keep their last computed
    /// value.
    ///
    /// # Returns
    /// - `Ok(true)`: Product deleted
    /// - `Ok(false)`: Product not found
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        if entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        entity::prelude::OrderProduct::delete_many()
            .filter(entity::order_product::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Product::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
