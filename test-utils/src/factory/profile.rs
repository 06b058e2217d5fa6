use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for test profiles.
///
/// Defaults: a valid address, phone `"(11) 98765-4321"`, city
/// `Some("Springfield {n}")`, state `Some("SP")`, zip `Some("12345-678")`.
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    address: String,
    phone: String,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    customer_id: i32,
}

impl<'a> ProfileFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            address: format!("123 Test Street, Apt {}", id),
            phone: "(11) 98765-4321".to_string(),
            city: Some(format!("Springfield {}", id)),
            state: Some("SP".to_string()),
            zip_code: Some("12345-678".to_string()),
            customer_id,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            zip_code: ActiveValue::Set(self.zip_code),
            customer_id: ActiveValue::Set(self.customer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
