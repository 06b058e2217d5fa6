use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

pub struct CreateProfileParams {
    pub address: String,
    pub phone: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub customer_id: i32,
}

pub struct UpdateProfileParams {
    pub address: String,
    pub phone: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateProfileParams,
    ) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            zip_code: ActiveValue::Set(params.zip_code),
            customer_id: ActiveValue::Set(params.customer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(id).one(self.db).await
    }

    /// A customer owns at most one profile, so this returns at most one row.
    pub async fn find_by_customer_id(
        &self,
        customer_id: i32,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::CustomerId.eq(customer_id))
            .one(self.db)
            .await
    }

    /// Case-insensitive equality match on city.
    pub async fn find_by_city(&self, city: &str) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(Func::lower(Expr::col(entity::profile::Column::City)).eq(city.to_lowercase()))
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Case-insensitive equality match on state.
    pub async fn find_by_state(&self, state: &str) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(Func::lower(Expr::col(entity::profile::Column::State)).eq(state.to_lowercase()))
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the contact fields of a profile. The owning customer is never
    /// reassigned.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated profile
    /// - `Ok(None)`: Profile not found
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = entity::prelude::Profile::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::profile::ActiveModel = profile.into();
        active.address = ActiveValue::Set(params.address);
        active.phone = ActiveValue::Set(params.phone);
        active.city = ActiveValue::Set(params.city);
        active.state = ActiveValue::Set(params.state);
        active.zip_code = ActiveValue::Set(params.zip_code);

        Ok(Some(active.update(self.db).await?))
    }

    /// # Returns
    /// - `Ok(true)`: Profile deleted
    /// - `Ok(false)`: Profile not found
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Profile::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
