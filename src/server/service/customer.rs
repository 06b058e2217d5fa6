use sea_orm::DatabaseConnection;

use crate::{
    model::customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
    server::{data::customer::CustomerRepository, error::AppError, util::validate},
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<CustomerDto>, AppError> {
        let customers = CustomerRepository::new(self.db).get_all().await?;

        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CustomerDto>, AppError> {
        let customer = CustomerRepository::new(self.db).get_by_id(id).await?;

        Ok(customer.map(CustomerDto::from))
    }

    /// Creates a customer. The email must be unique.
    pub async fn create(&self, dto: CreateCustomerDto) -> Result<CustomerDto, AppError> {
        Self::validate(&dto.name, &dto.email)?;

        let repo = CustomerRepository::new(self.db);
        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::BadRequest("Email is already in use".to_string()));
        }

        let customer = repo.create(dto.name, dto.email).await?;

        Ok(CustomerDto::from(customer))
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateCustomerDto,
    ) -> Result<Option<CustomerDto>, AppError> {
        Self::validate(&dto.name, &dto.email)?;

        let repo = CustomerRepository::new(self.db);
        if let Some(existing) = repo.find_by_email(&dto.email).await? {
            if existing.id != id {
                return Err(AppError::BadRequest("Email is already in use".to_string()));
            }
        }

        let customer = repo.update(id, dto.name, dto.email).await?;

        Ok(customer.map(CustomerDto::from))
    }

    /// Deletes a customer with its profile, orders, and order associations.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CustomerRepository::new(self.db).delete(id).await?)
    }

    fn validate(name: &str, email: &str) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if validate::is_blank(name) {
            errors.push("Name is required".to_string());
        }
        if validate::is_blank(email) {
            errors.push("Email is required".to_string());
        } else if !email.contains('@') {
            errors.push("Email must be a valid address".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
