use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
    ) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find_by_id(id).one(self.db).await
    }

    /// Exact-match lookup used to enforce email uniqueness.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates name and email of an existing customer.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated customer
    /// - `Ok(None)`: Customer not found
    pub async fn update(
        &self,
        id: i32,
        name: String,
        email: String,
    ) -> Result<Option<entity::customer::Model>, DbErr> {
        let Some(customer) = entity::prelude::Customer::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::customer::ActiveModel = customer.into();
        active.name = ActiveValue::Set(name);
        active.email = ActiveValue::Set(email);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a customer together with its profile, orders, and order
    /// product associations, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: Customer deleted
    /// - `Ok(false)`: Customer not found
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        if entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        let order_ids: Vec<i32> = entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.eq(id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|order| order.id)
            .collect();

        if !order_ids.is_empty() {
            entity::prelude::OrderProduct::delete_many()
                .filter(entity::order_product::Column::OrderId.is_in(order_ids.clone()))
                .exec(&txn)
                .await?;
            entity::prelude::Order::delete_many()
                .filter(entity::order::Column::Id.is_in(order_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Profile::delete_many()
            .filter(entity::profile::Column::CustomerId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Customer::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
