use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
    server::{error::AppError, service::customer::CustomerService, state::AppState},
};

/// GET /api/customers - List all customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "customers",
    responses((status = 200, description = "All customers", body = [CustomerDto]))
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = CustomerService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(customers)))
}

/// GET /api/customers/{id} - Get a customer by id
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

    Ok((StatusCode::OK, Json(customer)))
}

/// POST /api/customers - Create a customer
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "customers",
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Invalid data or duplicate email")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(dto): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /api/customers/{id} - Update a customer
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Invalid data or duplicate email"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

    Ok((StatusCode::OK, Json(customer)))
}

/// DELETE /api/customers/{id} - Delete a customer and its dependent records
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if CustomerService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Customer not found".to_string()))
    }
}
