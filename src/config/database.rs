//! Database connection and table creation using `SeaORM`.
//!
//! Tables are created from the entity definitions via
//! `Schema::create_table_from_entity`, so the schema (including the unique
//! email constraint and the order/item foreign keys) always matches the Rust
//! structs without hand-written SQL.

use crate::entities::{Customer, Order, OrderItem, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default on-disk database when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/orderdesk.sqlite?mode=rwc";

/// Resolves the database URL: `DATABASE_URL` from the environment wins, then
/// the config file value, then the default local `SQLite` file.
#[must_use]
pub fn resolve_database_url(config_value: Option<&str>) -> String {
    resolve_database_url_from(std::env::var("DATABASE_URL").ok(), config_value)
}

fn resolve_database_url_from(env_value: Option<String>, config_value: Option<&str>) -> String {
    env_value
        .or_else(|| config_value.map(ToString::to_string))
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database at the given URL.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all four tables (customers, products, orders, order items) from
/// the entity definitions. Existing tables are left untouched, so this is
/// safe to run on every startup.
///
/// # Errors
/// Returns an error if a table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = [
        schema.create_table_from_entity(Customer),
        schema.create_table_from_entity(Product),
        schema.create_table_from_entity(Order),
        schema.create_table_from_entity(OrderItem),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        customer::Model as CustomerModel, order::Model as OrderModel,
        order_item::Model as OrderItemModel, product::Model as ProductModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[test]
    fn test_resolve_database_url_precedence() {
        assert_eq!(
            resolve_database_url_from(Some("sqlite://env.sqlite".to_string()), Some("sqlite://cfg.sqlite")),
            "sqlite://env.sqlite"
        );
        assert_eq!(
            resolve_database_url_from(None, Some("sqlite://cfg.sqlite")),
            "sqlite://cfg.sqlite"
        );
        assert_eq!(resolve_database_url_from(None, None), DEFAULT_DATABASE_URL);
    }

    #[tokio::test]
    async fn test_create_connection() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Verify the connection works with a simple query
        let _: Vec<CustomerModel> = Customer::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // All four tables exist and are queryable
        let _: Vec<CustomerModel> = Customer::find().limit(1).all(&db).await?;
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<OrderModel> = Order::find().limit(1).all(&db).await?;
        let _: Vec<OrderItemModel> = OrderItem::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_email_unique_constraint() -> Result<()> {
        use sea_orm::{ActiveModelTrait, Set};

        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        let row = |email: &str| crate::entities::customer::ActiveModel {
            first_name: Set("Anna".to_string()),
            last_name: Set("Larsen".to_string()),
            email: Set(email.to_string()),
            phone: Set("0123456789".to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        row("anna@example.com").insert(&db).await?;
        // Second insert with the same email violates the unique constraint
        let result = row("anna@example.com").insert(&db).await;
        assert!(result.is_err());

        Ok(())
    }
}
