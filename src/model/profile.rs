use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub address: String,
    pub phone: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub customer_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateProfileDto {
    pub address: String,
    pub phone: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub customer_id: i32,
}

/// Update payload. The owning customer of a profile is never reassigned.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProfileDto {
    pub address: String,
    pub phone: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl From<entity::profile::Model> for ProfileDto {
    fn from(model: entity::profile::Model) -> Self {
        Self {
            id: model.id,
            address: model.address,
            phone: model.phone,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
            customer_id: model.customer_id,
        }
    }
}
