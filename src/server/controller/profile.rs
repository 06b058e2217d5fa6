use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::profile::{CreateProfileDto, ProfileDto, UpdateProfileDto},
    server::{error::AppError, service::profile::ProfileService, state::AppState},
};

/// GET /api/profiles - List all profiles
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = "profiles",
    responses((status = 200, description = "All profiles", body = [ProfileDto]))
)]
pub async fn list_profiles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let profiles = ProfileService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(profiles)))
}

/// GET /api/profiles/{id} - Get a profile by id
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    tag = "profiles",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Profile found", body = ProfileDto),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok((StatusCode::OK, Json(profile)))
}

/// POST /api/profiles - Create a profile for a customer
#[utoipa::path(
    post,
    path = "/api/profiles",
    tag = "profiles",
    request_body = CreateProfileDto,
    responses(
        (status = 201, description = "Profile created", body = ProfileDto),
        (status = 400, description = "Invalid data, missing customer, or customer already has a profile")
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(dto): Json<CreateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// PUT /api/profiles/{id} - Update a profile's contact fields
#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    tag = "profiles",
    params(("id" = i32, Path, description = "Profile id")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok((StatusCode::OK, Json(profile)))
}

/// DELETE /api/profiles/{id} - Delete a profile
#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    tag = "profiles",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if ProfileService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Profile not found".to_string()))
    }
}

/// GET /api/profiles/customer/{customer_id} - Get the profile of a customer
#[utoipa::path(
    get,
    path = "/api/profiles/customer/{customer_id}",
    tag = "profiles",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Profile found", body = ProfileDto),
        (status = 404, description = "Customer has no profile")
    )
)]
pub async fn get_profile_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = ProfileService::new(&state.db)
        .find_by_customer_id(customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok((StatusCode::OK, Json(profile)))
}

/// GET /api/profiles/city/{city} - List profiles in a city (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/profiles/city/{city}",
    tag = "profiles",
    params(("city" = String, Path, description = "City name")),
    responses((status = 200, description = "Profiles found", body = [ProfileDto]))
)]
pub async fn get_profiles_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profiles = ProfileService::new(&state.db).find_by_city(&city).await?;

    Ok((StatusCode::OK, Json(profiles)))
}

/// GET /api/profiles/state/{state} - List profiles in a state (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/profiles/state/{state}",
    tag = "profiles",
    params(("state" = String, Path, description = "Two-letter state code")),
    responses((status = 200, description = "Profiles found", body = [ProfileDto]))
)]
pub async fn get_profiles_by_state(
    State(state): State<AppState>,
    Path(state_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profiles = ProfileService::new(&state.db)
        .find_by_state(&state_code)
        .await?;

    Ok((StatusCode::OK, Json(profiles)))
}
