//! OrderItem entity - A single line of an order.
//!
//! `unit_price` is a snapshot of the product's price at placement time and is
//! never re-read from the product afterwards, preserving historical accuracy.
//! Items are owned exclusively by their order (cascade delete); the product
//! reference is non-owning, and the foreign key restricts deleting a product
//! that still has items pointing at it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    /// Unique identifier for the order item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the order this item belongs to
    pub order_id: i64,
    /// ID of the ordered product
    pub product_id: i64,
    /// Quantity ordered, always greater than zero
    pub quantity: f64,
    /// Product price captured at placement time
    pub unit_price: f64,
    /// `unit_price * quantity`, rounded to 2 decimal places
    pub line_total: f64,
}

/// Defines relationships between OrderItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to exactly one order and dies with it
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_delete = "Cascade"
    )]
    Order,
    /// Each item references the product it was priced from
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Restrict"
    )]
    Product,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
