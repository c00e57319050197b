//! Order query service - read-only retrieval of orders for display.
//!
//! Related entities are attached through explicit joins requested by the
//! caller-facing functions; there is no lazy loading. Orders are returned
//! newest first for deterministic listings.

use crate::{
    entities::{Customer, Order, OrderItem, Product, customer, order, order_item, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*};

/// An order with its customer and line items attached for display.
///
/// Each item carries the product it was priced from when it still exists.
/// The foreign key restricts deleting a referenced product, so `None` here
/// indicates store corruption rather than an expected state; the item's own
/// price snapshot is authoritative either way.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderDetails {
    /// The order itself
    pub order: order::Model,
    /// The customer who placed it
    pub customer: customer::Model,
    /// Line items paired with their product, in insertion order
    pub items: Vec<(order_item::Model, Option<product::Model>)>,
}

/// Retrieves all orders with their customer eagerly attached, newest first.
///
/// # Errors
/// Returns an error if the query fails or an order references a customer
/// that no longer exists (customers cannot currently be deleted, so this
/// indicates store corruption).
pub async fn list_orders(
    db: &DatabaseConnection,
) -> Result<Vec<(order::Model, customer::Model)>> {
    let rows = Order::find()
        .find_also_related(Customer)
        .order_by_desc(order::Column::OrderDate)
        .order_by_desc(order::Column::Id)
        .all(db)
        .await?;

    rows.into_iter()
        .map(|(order, customer)| {
            let customer_id = order.customer_id;
            customer
                .map(|c| (order, c))
                .ok_or(Error::CustomerNotFound { id: customer_id })
        })
        .collect()
}

/// Retrieves a single order with its customer and all items (each with its
/// product) attached, or `None` if no such order exists.
///
/// # Errors
/// Returns an error if a query fails or the order's customer is missing.
pub async fn get_order_details(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<OrderDetails>> {
    let Some((order, customer)) = Order::find_by_id(order_id)
        .find_also_related(Customer)
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let customer = customer.ok_or(Error::CustomerNotFound {
        id: order.customer_id,
    })?;

    let items = OrderItem::find()
        .filter(order_item::Column::OrderId.eq(order.id))
        .find_also_related(Product)
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;

    Ok(Some(OrderDetails {
        order,
        customer,
        items,
    }))
}
