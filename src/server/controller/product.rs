use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::{error::AppError, service::product::ProductService, state::AppState},
};

#[derive(Deserialize, IntoParams)]
pub struct NameQuery {
    /// Substring to search for (case-insensitive).
    pub name: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct PriceRangeQuery {
    /// Lower bound, inclusive.
    pub min_price: Option<Decimal>,
    /// Upper bound, inclusive.
    pub max_price: Option<Decimal>,
}

/// GET /api/products - List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses((status = 200, description = "All products", body = [ProductDto]))
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(products)))
}

/// GET /api/products/{id} - Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok((StatusCode::OK, Json(product)))
}

/// POST /api/products - Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid data")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(dto): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} - Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid data"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok((StatusCode::OK, Json(product)))
}

/// DELETE /api/products/{id} - Delete a product and its order associations
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if ProductService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Product not found".to_string()))
    }
}

/// GET /api/products/search?name= - Search products by name substring
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "products",
    params(NameQuery),
    responses(
        (status = 200, description = "Matching products", body = [ProductDto]),
        (status = 400, description = "Missing or blank name parameter")
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let name = extract_search_name(&query)?;

    let products = ProductService::new(&state.db)
        .find_by_name_containing(name)
        .await?;

    Ok((StatusCode::OK, Json(products)))
}

/// GET /api/products/price-range?min_price=&max_price= - Products in a price range
#[utoipa::path(
    get,
    path = "/api/products/price-range",
    tag = "products",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Matching products", body = [ProductDto]),
        (status = 400, description = "Missing bounds or min_price greater than max_price")
    )
)]
pub async fn get_products_by_price_range(
    State(state): State<AppState>,
    Query(query): Query<PriceRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (min_price, max_price) = extract_price_range(&query)?;

    let products = ProductService::new(&state.db)
        .find_by_price_range(min_price, max_price)
        .await?;

    Ok((StatusCode::OK, Json(products)))
}

/// Trimmed, non-empty search term, or a 400.
fn extract_search_name(query: &NameQuery) -> Result<&str, AppError> {
    query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'name' is required".to_string()))
}

/// Both bounds present and correctly ordered, or a 400.
fn extract_price_range(query: &PriceRangeQuery) -> Result<(Decimal, Decimal), AppError> {
    let (Some(min_price), Some(max_price)) = (query.min_price, query.max_price) else {
        return Err(AppError::BadRequest(
            "Query parameters 'min_price' and 'max_price' are required".to_string(),
        ));
    };

    if min_price > max_price {
        return Err(AppError::BadRequest(
            "'min_price' cannot be greater than 'max_price'".to_string(),
        ));
    }

    Ok((min_price, max_price))
}
