//! Order placement workflow - the one multi-step, failure-sensitive operation.
//!
//! Placement runs as a single database transaction: the order row is inserted
//! first (with a zero total) so item rows have a valid parent id, items are
//! processed strictly in request order, and the total is back-filled before
//! commit. Any failure drops the transaction, rolling back the provisional
//! order row, all item rows, and all stock decrements.
//!
//! Stock is decremented with a conditional update
//! (`SET stock = stock - q WHERE id = ? AND stock >= q`) checked by affected
//! row count, so two concurrent placements can never drive a product's stock
//! negative.

use crate::{
    core::validate,
    entities::{Customer, OrderStatus, Product, order, order_item, product},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One requested line of an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// Product to order
    pub product_id: i64,
    /// Requested quantity, must be greater than zero
    pub quantity: f64,
}

/// The order placement request shape - the sole structured wire contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Customer placing the order
    pub customer_id: i64,
    /// Requested lines, processed strictly in this order
    pub order_items: Vec<OrderItemRequest>,
}

/// Outcome reported to the presentation layer. Business-rule failures are
/// `success: false` with a descriptive message, never a transport error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    /// Whether the order was placed
    pub success: bool,
    /// Human-readable outcome description
    pub message: String,
    /// Generated order id on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
}

/// Places an order atomically: validates the request, snapshots unit prices,
/// decrements stock, and persists the order with its items as one commit.
///
/// Returns the persisted order with its back-filled total. Every failure
/// leaves the store untouched.
///
/// # Errors
/// Returns an error if:
/// - The request has no items or a non-positive/non-finite quantity
///   (`InvalidRequest`)
/// - The customer does not exist (`CustomerNotFound`)
/// - A product does not exist (`ProductNotFound`)
/// - A product's stock is below the requested quantity (`InsufficientStock`)
/// - A database operation fails
pub async fn place_order(
    db: &DatabaseConnection,
    request: &PlaceOrderRequest,
) -> Result<order::Model> {
    // Validate the request shape before touching storage
    if request.order_items.is_empty() {
        return Err(Error::InvalidRequest {
            message: "order must contain at least one item".to_string(),
        });
    }
    for item in &request.order_items {
        if !item.quantity.is_finite() || item.quantity <= 0.0 {
            return Err(Error::InvalidRequest {
                message: format!(
                    "quantity for product {} must be greater than zero",
                    item.product_id
                ),
            });
        }
    }

    // Use a transaction to ensure atomicity; dropping it without commit
    // rolls back everything, including the provisional order row
    let txn = db.begin().await?;

    Customer::find_by_id(request.customer_id)
        .one(&txn)
        .await?
        .ok_or(Error::CustomerNotFound {
            id: request.customer_id,
        })?;

    // Phase one: insert the order with a zero total to obtain its id, so
    // item rows can reference a valid parent
    let provisional = order::ActiveModel {
        customer_id: Set(request.customer_id),
        order_date: Set(chrono::Utc::now()),
        total_amount: Set(0.0),
        status: Set(OrderStatus::Completed),
        ..Default::default()
    };
    let placed = provisional.insert(&txn).await?;

    let mut total_amount = 0.0;
    for item in &request.order_items {
        let product = Product::find_by_id(item.product_id)
            .one(&txn)
            .await?
            .ok_or(Error::ProductNotFound {
                id: item.product_id,
            })?;

        // Conditional decrement: only succeeds while enough stock remains,
        // closing the check-then-act race between concurrent placements
        let updated = Product::update_many()
            .col_expr(
                product::Column::StockQuantity,
                Expr::col(product::Column::StockQuantity).sub(item.quantity),
            )
            .filter(product::Column::Id.eq(item.product_id))
            .filter(product::Column::StockQuantity.gte(item.quantity))
            .exec(&txn)
            .await?;

        if updated.rows_affected == 0 {
            warn!(
                product = %product.name,
                requested = item.quantity,
                available = product.stock_quantity,
                "order rejected for insufficient stock"
            );
            return Err(Error::InsufficientStock {
                product: product.name,
                requested: item.quantity,
                available: product.stock_quantity,
            });
        }

        // Snapshot the unit price now; it is never re-read from the product
        let unit_price = product.price;
        let line_total = validate::round2(unit_price * item.quantity);

        let order_item = order_item::ActiveModel {
            order_id: Set(placed.id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            unit_price: Set(unit_price),
            line_total: Set(line_total),
            ..Default::default()
        };
        order_item.insert(&txn).await?;

        total_amount += line_total;
    }

    // Phase two: back-fill the accumulated total
    let mut placed: order::ActiveModel = placed.into();
    placed.total_amount = Set(validate::round2(total_amount));
    let placed = placed.update(&txn).await?;

    txn.commit().await?;

    info!(
        order_id = placed.id,
        customer_id = placed.customer_id,
        total = placed.total_amount,
        "order placed"
    );
    Ok(placed)
}

/// Boundary wrapper around [`place_order`]: business-rule failures become a
/// `success: false` response with a human-readable reason, while
/// infrastructure faults keep propagating as errors.
///
/// # Errors
/// Returns an error only for infrastructure faults (storage unavailable or
/// unexpected database failures).
pub async fn submit_order(
    db: &DatabaseConnection,
    request: &PlaceOrderRequest,
) -> Result<PlaceOrderResponse> {
    match place_order(db, request).await {
        Ok(order) => Ok(PlaceOrderResponse {
            success: true,
            message: format!("Order {} placed successfully", order.id),
            order_id: Some(order.id),
        }),
        Err(error) if error.is_business_failure() => Ok(PlaceOrderResponse {
            success: false,
            message: error.to_string(),
            order_id: None,
        }),
        Err(error) => Err(error),
    }
}
