//! Shared test utilities for `orderdesk`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{directory, placement},
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test customer with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `email` - Email address (must be unique per test database)
///
/// # Defaults
/// * `first_name`: "Anna"
/// * `last_name`: "Larsen"
/// * `phone`: "0123456789"
pub async fn create_test_customer(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::customer::Model> {
    directory::create_customer(
        db,
        "Anna".to_string(),
        "Larsen".to_string(),
        email.to_string(),
        "0123456789".to_string(),
    )
    .await
}

/// Creates a test product with the given price and stock, no description.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    stock_quantity: f64,
) -> Result<entities::product::Model> {
    crate::core::catalog::create_product(db, name.to_string(), None, price, stock_quantity).await
}

/// Places a single-item order through the placement workflow.
pub async fn place_test_order(
    db: &DatabaseConnection,
    customer_id: i64,
    product_id: i64,
    quantity: f64,
) -> Result<entities::order::Model> {
    placement::place_order(
        db,
        &placement::PlaceOrderRequest {
            customer_id,
            order_items: vec![placement::OrderItemRequest {
                product_id,
                quantity,
            }],
        },
    )
    .await
}

/// Sets up a complete test environment with one customer and one product
/// (price 9.99, stock 5). Returns (db, customer, product).
pub async fn setup_with_catalog() -> Result<(
    DatabaseConnection,
    entities::customer::Model,
    entities::product::Model,
)> {
    let db = setup_test_db().await?;
    let customer = create_test_customer(&db, "anna@example.com").await?;
    let product = create_test_product(&db, "Widget", 9.99, 5.0).await?;
    Ok((db, customer, product))
}
