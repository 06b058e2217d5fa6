use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{CreateProfileDto, ProfileDto, UpdateProfileDto},
    server::{
        data::{
            customer::CustomerRepository,
            profile::{CreateProfileParams, ProfileRepository, UpdateProfileParams},
        },
        error::AppError,
        util::validate,
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<ProfileDto>, AppError> {
        let profiles = ProfileRepository::new(self.db).get_all().await?;

        Ok(profiles.into_iter().map(ProfileDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProfileDto>, AppError> {
        let profile = ProfileRepository::new(self.db).get_by_id(id).await?;

        Ok(profile.map(ProfileDto::from))
    }

    /// Creates a profile for a customer.
    ///
    /// The customer must exist and must not already own a profile (1:1).
    pub async fn create(&self, dto: CreateProfileDto) -> Result<ProfileDto, AppError> {
        Self::validate(
            &dto.address,
            &dto.phone,
            dto.city.as_deref(),
            dto.state.as_deref(),
            dto.zip_code.as_deref(),
        )?;

        if CustomerRepository::new(self.db)
            .get_by_id(dto.customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Customer {} does not exist",
                dto.customer_id
            )));
        }

        let repo = ProfileRepository::new(self.db);
        if repo.find_by_customer_id(dto.customer_id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Customer {} already has a profile",
                dto.customer_id
            )));
        }

        let profile = repo
            .create(CreateProfileParams {
                address: dto.address,
                phone: dto.phone,
                city: dto.city,
                state: dto.state,
                zip_code: dto.zip_code,
                customer_id: dto.customer_id,
            })
            .await?;

        Ok(ProfileDto::from(profile))
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateProfileDto,
    ) -> Result<Option<ProfileDto>, AppError> {
        Self::validate(
            &dto.address,
            &dto.phone,
            dto.city.as_deref(),
            dto.state.as_deref(),
            dto.zip_code.as_deref(),
        )?;

        let profile = ProfileRepository::new(self.db)
            .update(
                id,
                UpdateProfileParams {
                    address: dto.address,
                    phone: dto.phone,
                    city: dto.city,
                    state: dto.state,
                    zip_code: dto.zip_code,
                },
            )
            .await?;

        Ok(profile.map(ProfileDto::from))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ProfileRepository::new(self.db).delete(id).await?)
    }

    pub async fn find_by_customer_id(
        &self,
        customer_id: i32,
    ) -> Result<Option<ProfileDto>, AppError> {
        let profile = ProfileRepository::new(self.db)
            .find_by_customer_id(customer_id)
            .await?;

        Ok(profile.map(ProfileDto::from))
    }

    pub async fn find_by_city(&self, city: &str) -> Result<Vec<ProfileDto>, AppError> {
        let profiles = ProfileRepository::new(self.db).find_by_city(city).await?;

        Ok(profiles.into_iter().map(ProfileDto::from).collect())
    }

    pub async fn find_by_state(&self, state: &str) -> Result<Vec<ProfileDto>, AppError> {
        let profiles = ProfileRepository::new(self.db).find_by_state(state).await?;

        Ok(profiles.into_iter().map(ProfileDto::from).collect())
    }

    fn validate(
        address: &str,
        phone: &str,
        city: Option<&str>,
        state: Option<&str>,
        zip_code: Option<&str>,
    ) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if validate::is_blank(address) {
            errors.push("Address is required".to_string());
        } else if !(10..=200).contains(&address.chars().count()) {
            errors.push("Address must be between 10 and 200 characters".to_string());
        }

        if validate::is_blank(phone) {
            errors.push("Phone is required".to_string());
        } else if !validate::is_valid_phone(phone) {
            errors.push(
                "Phone must match the format (XX) XXXXX-XXXX or (XX) XXXX-XXXX".to_string(),
            );
        }

        if let Some(city) = city {
            if city.chars().count() > 100 {
                errors.push("City must be at most 100 characters".to_string());
            }
        }

        if let Some(state) = state {
            if state.chars().count() != 2 {
                errors.push("State must have exactly 2 characters".to_string());
            }
        }

        if let Some(zip_code) = zip_code {
            if !validate::is_valid_zip_code(zip_code) {
                errors.push("Zip code must match the format XXXXX-XXX".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
