use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::{data::product::ProductRepository, error::AppError, util::validate},
};

/// Smallest accepted price, 0.01.
const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<ProductDto>, AppError> {
        let products = ProductRepository::new(self.db).get_all().await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductDto>, AppError> {
        let product = ProductRepository::new(self.db).get_by_id(id).await?;

        Ok(product.map(ProductDto::from))
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductDto, AppError> {
        Self::validate(&dto.name, dto.price, dto.description.as_deref())?;

        let product = ProductRepository::new(self.db)
            .create(dto.name, dto.price, dto.description)
            .await?;

        Ok(ProductDto::from(product))
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateProductDto,
    ) -> Result<Option<ProductDto>, AppError> {
        Self::validate(&dto.name, dto.price, dto.description.as_deref())?;

        let product = ProductRepository::new(self.db)
            .update(id, dto.name, dto.price, dto.description)
            .await?;

        Ok(product.map(ProductDto::from))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ProductRepository::new(self.db).delete(id).await?)
    }

    pub async fn find_by_name_containing(&self, name: &str) -> Result<Vec<ProductDto>, AppError> {
        let products = ProductRepository::new(self.db)
            .find_by_name_containing(name)
            .await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    pub async fn find_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<ProductDto>, AppError> {
        let products = ProductRepository::new(self.db)
            .find_by_price_range(min_price, max_price)
            .await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    fn validate(name: &str, price: Decimal, description: Option<&str>) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if validate::is_blank(name) {
            errors.push("Name is required".to_string());
        } else if !(2..=100).contains(&name.chars().count()) {
            errors.push("Name must be between 2 and 100 characters".to_string());
        }

        if price < MIN_PRICE {
            errors.push("Price must be greater than zero".to_string());
        }

        if let Some(description) = description {
            if description.chars().count() > 500 {
                errors.push("Description must be at most 500 characters".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
