use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use entity::order_status::OrderStatus;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    server::{error::AppError, service::order::OrderService, state::AppState},
};

#[derive(Deserialize, IntoParams)]
pub struct DateRangeQuery {
    /// Range start, RFC 3339, inclusive.
    pub start: Option<String>,
    /// Range end, RFC 3339, inclusive.
    pub end: Option<String>,
}

/// GET /api/orders - List all orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses((status = 200, description = "All orders", body = [OrderDto]))
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// GET /api/orders/{id} - Get an order with its products
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderDto),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order)))
}

/// POST /api/orders - Create an order
///
/// New orders start with status NEW, the order date set to the current time,
/// and a total computed from the associated products.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Unknown customer or product ids")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(dto): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /api/orders/{id} - Update an order's status and/or product set
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Order updated, total recomputed", body = OrderDto),
        (status = 400, description = "Unknown product ids"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db)
        .update(id, dto)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order)))
}

/// DELETE /api/orders/{id} - Delete an order and its product associations
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if OrderService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Order not found".to_string()))
    }
}

/// GET /api/orders/customer/{customer_id} - Orders placed by a customer
#[utoipa::path(
    get,
    path = "/api/orders/customer/{customer_id}",
    tag = "orders",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "Orders found", body = [OrderDto]))
)]
pub async fn get_orders_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db)
        .find_by_customer_id(customer_id)
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// GET /api/orders/status/{status} - Orders with a given status
#[utoipa::path(
    get,
    path = "/api/orders/status/{status}",
    tag = "orders",
    params(("status" = String, Path, description = "Order status, e.g. NEW or SHIPPED")),
    responses((status = 200, description = "Orders found", body = [OrderDto]))
)]
pub async fn get_orders_by_status(
    State(state): State<AppState>,
    Path(status): Path<OrderStatus>,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).find_by_status(status).await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// GET /api/orders/date-range?start=&end= - Orders placed within a time range
#[utoipa::path(
    get,
    path = "/api/orders/date-range",
    tag = "orders",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Orders found", body = [OrderDto]),
        (status = 400, description = "Missing or malformed bounds, or start after end")
    )
)]
pub async fn get_orders_by_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = extract_date_range(&query)?;

    let orders = OrderService::new(&state.db)
        .find_by_date_range(start, end)
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// POST /api/orders/{order_id}/products/{product_id} - Add a product to an order
///
/// Recomputes and persists the order total over the new product set.
#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/products/{product_id}",
    tag = "orders",
    params(
        ("order_id" = i32, Path, description = "Order id"),
        ("product_id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product added, total recomputed", body = OrderDto),
        (status = 400, description = "Product already on the order"),
        (status = 404, description = "Order or product not found")
    )
)]
pub async fn add_product_to_order(
    State(state): State<AppState>,
    Path((order_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db)
        .add_product(order_id, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order or product not found".to_string()))?;

    Ok((StatusCode::OK, Json(order)))
}

/// Both bounds present, RFC 3339, and correctly ordered, or a 400.
fn extract_date_range(query: &DateRangeQuery) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let (Some(start), Some(end)) = (query.start.as_deref(), query.end.as_deref()) else {
        return Err(AppError::BadRequest(
            "Query parameters 'start' and 'end' are required".to_string(),
        ));
    };

    let start = parse_timestamp("start", start)?;
    let end = parse_timestamp("end", end)?;
    if start > end {
        return Err(AppError::BadRequest(
            "'start' cannot be after 'end'".to_string(),
        ));
    }

    Ok((start, end))
}

fn parse_timestamp(param: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Query parameter '{}' must be an RFC 3339 timestamp",
                param
            ))
        })
}
