//! Backend implementation of the order-management REST API.
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: validation, total computation, defaults
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and OpenAPI document
//!
//! A typical request flows router → controller → service → repository →
//! database, with the resulting domain data mapped back to a DTO and
//! serialized as JSON.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
