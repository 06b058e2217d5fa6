use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    /// Serialized as a string to keep the decimal exact in JSON.
    pub price: Decimal,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateProductDto {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateProductDto {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

impl From<entity::product::Model> for ProductDto {
    fn from(model: entity::product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            description: model.description,
        }
    }
}
