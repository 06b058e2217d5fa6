use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
        product::{CreateProductDto, ProductDto, UpdateProductDto},
        profile::{CreateProfileDto, ProfileDto, UpdateProfileDto},
    },
    server::{
        controller::{customer, order, product, profile},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orderboard API",
        description = "CRUD REST backend for customers, profiles, products, and orders"
    ),
    paths(
        customer::list_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,
        profile::list_profiles,
        profile::get_profile,
        profile::create_profile,
        profile::update_profile,
        profile::delete_profile,
        profile::get_profile_by_customer,
        profile::get_profiles_by_city,
        profile::get_profiles_by_state,
        product::list_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::search_products,
        product::get_products_by_price_range,
        order::list_orders,
        order::get_order,
        order::create_order,
        order::update_order,
        order::delete_order,
        order::get_orders_by_customer,
        order::get_orders_by_status,
        order::get_orders_by_date_range,
        order::add_product_to_order,
    ),
    components(schemas(
        ErrorDto,
        CustomerDto,
        CreateCustomerDto,
        UpdateCustomerDto,
        ProfileDto,
        CreateProfileDto,
        UpdateProfileDto,
        ProductDto,
        CreateProductDto,
        UpdateProductDto,
        OrderDto,
        CreateOrderDto,
        UpdateOrderDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/customers",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/api/customers/{id}",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .route(
            "/api/profiles",
            get(profile::list_profiles).post(profile::create_profile),
        )
        .route(
            "/api/profiles/{id}",
            get(profile::get_profile)
                .put(profile::update_profile)
                .delete(profile::delete_profile),
        )
        .route(
            "/api/profiles/customer/{customer_id}",
            get(profile::get_profile_by_customer),
        )
        .route("/api/profiles/city/{city}", get(profile::get_profiles_by_city))
        .route(
            "/api/profiles/state/{state}",
            get(profile::get_profiles_by_state),
        )
        .route(
            "/api/products",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/api/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route("/api/products/search", get(product::search_products))
        .route(
            "/api/products/price-range",
            get(product::get_products_by_price_range),
        )
        .route(
            "/api/orders",
            get(order::list_orders).post(order::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(order::get_order)
                .put(order::update_order)
                .delete(order::delete_order),
        )
        .route(
            "/api/orders/customer/{customer_id}",
            get(order::get_orders_by_customer),
        )
        .route("/api/orders/status/{status}", get(order::get_orders_by_status))
        .route("/api/orders/date-range", get(order::get_orders_by_date_range))
        .route(
            "/api/orders/{order_id}/products/{product_id}",
            post(order::add_product_to_order),
        )
}
