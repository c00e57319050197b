//! Order entity - Represents a placed order belonging to a customer.
//!
//! Orders are created only through the placement workflow and own their
//! order items (cascade delete at the foreign-key level). `total_amount`
//! always equals the sum of the items' line totals after a commit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order. The placement workflow only ever produces
/// `Completed`; `Pending` and `Cancelled` exist for future transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    /// Order accepted but not yet fulfilled
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Order placed and stock decremented
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Order cancelled
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the customer who placed the order
    pub customer_id: i64,
    /// When the order was placed
    pub order_date: DateTimeUtc,
    /// Sum of the order items' line totals
    pub total_amount: f64,
    /// Current lifecycle status
    pub status: OrderStatus,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// An order owns its line items exclusively
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
