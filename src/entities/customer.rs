//! Customer entity - Represents a customer record in the directory.
//!
//! Each customer has a name, a globally unique email, a phone number, and a
//! creation timestamp. Customers are referenced by orders; the email column
//! carries a uniqueness constraint backing the directory's duplicate check.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Unique identifier for the customer
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Customer's first name
    pub first_name: String,
    /// Customer's last name
    pub last_name: String,
    /// Email address, unique across all customers
    #[sea_orm(unique)]
    pub email: String,
    /// Phone number (digits, hyphens, and plus signs)
    pub phone: String,
    /// When the customer record was created; immutable after creation
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A customer can place many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
