//! Product catalog business logic - CRUD over products.
//!
//! Operations here are independent of each other and have no cross-entity
//! side effects; stock decrements driven by order placement live in the
//! placement workflow. Storage errors always propagate to the caller instead
//! of being masked as empty results.

use crate::{
    config::settings::ProductSeed,
    core::validate,
    entities::{Product, product},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all products, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_desc(product::Column::CreatedAt)
        .order_by_desc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID, returning None if absent.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product(db: &DatabaseConnection, product_id: i64) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product, performing input validation.
///
/// The price is rounded to 2 decimal places and `created_at` is set to now.
///
/// # Errors
/// Returns an error if:
/// - The name is not 2-100 characters after trimming
/// - The description exceeds 200 characters
/// - The price or stock quantity is negative or not finite
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    description: Option<String>,
    price: f64,
    stock_quantity: f64,
) -> Result<product::Model> {
    let name = validate::required_text("name", &name, 2, 100)?;
    let description = validate::optional_text("description", description.as_deref(), 200)?;
    let price = validate::round2(validate::non_negative_amount("price", price)?);
    let stock_quantity = validate::non_negative_amount("stockQuantity", stock_quantity)?;

    let product = product::ActiveModel {
        name: Set(name),
        description: Set(description),
        price: Set(price),
        stock_quantity: Set(stock_quantity),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product's name, description, price, and stock.
///
/// A missing product is a no-op returning `Ok(None)` regardless of the
/// payload, so the existence check runs before validation; `id` and
/// `created_at` are never touched.
///
/// # Errors
/// Returns an error if validation fails or the database update fails.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    stock_quantity: f64,
) -> Result<Option<product::Model>> {
    let Some(existing) = Product::find_by_id(product_id).one(db).await? else {
        return Ok(None);
    };

    let name = validate::required_text("name", &name, 2, 100)?;
    let description = validate::optional_text("description", description.as_deref(), 200)?;
    let price = validate::round2(validate::non_negative_amount("price", price)?);
    let stock_quantity = validate::non_negative_amount("stockQuantity", stock_quantity)?;

    let mut product: product::ActiveModel = existing.into();
    product.name = Set(name);
    product.description = Set(description);
    product.price = Set(price);
    product.stock_quantity = Set(stock_quantity);

    product.update(db).await.map(Some).map_err(Into::into)
}

/// Deletes a product. A missing product is a no-op; returns whether a row
/// was actually removed.
///
/// # Errors
/// Returns an error if the database delete operation fails.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<bool> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Seeds the catalog with configured products, inserting only those whose
/// name is not already present. Used at startup.
///
/// # Errors
/// Returns an error if a lookup or insert fails.
pub async fn seed_catalog(db: &DatabaseConnection, seeds: &[ProductSeed]) -> Result<()> {
    for seed in seeds {
        let existing = Product::find()
            .filter(product::Column::Name.eq(seed.name.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        create_product(
            db,
            seed.name.clone(),
            seed.description.clone(),
            seed.price,
            seed.stock_quantity,
        )
        .await?;
        info!(name = %seed.name, "seeded catalog product");
    }
    Ok(())
}
