//! Product entity - Represents an item in the catalog with price and stock.
//!
//! Products are mutated by catalog edits and by order placement, which
//! decrements `stock_quantity`. The stock invariant (`stock_quantity >= 0`
//! after every commit) is enforced by the placement workflow's conditional
//! update, not by this entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Price per unit in dollars, rounded to 2 decimal places
    pub price: f64,
    /// Quantity currently available for ordering
    pub stock_quantity: f64,
    /// When the product was created; immutable after creation
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Order items reference products but do not own them
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
