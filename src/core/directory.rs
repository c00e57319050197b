//! Customer directory business logic - CRUD over customers.
//!
//! Mirrors the catalog service shape plus an email uniqueness check: creation
//! fails with `DuplicateEmail` when another customer already holds the email,
//! and the update path rejects an email that collides with a *different*
//! customer. Deletion is intentionally unsupported in this revision; callers
//! receive a typed `Unsupported` error rather than a silent success.

use crate::{
    core::validate,
    entities::{Customer, customer},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all customers, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_desc(customer::Column::CreatedAt)
        .order_by_desc(customer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific customer by its unique ID, returning None if absent.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_customer(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<Option<customer::Model>> {
    Customer::find_by_id(customer_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a customer by exact email match.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_customer_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<customer::Model>> {
    Customer::find()
        .filter(customer::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new customer, performing input validation and the email
/// uniqueness check. Sets `created_at` to now.
///
/// # Errors
/// Returns an error if:
/// - A name is not 2-100 characters after trimming
/// - The email is syntactically invalid
/// - The phone number is not 10-13 digits/hyphens/plus signs
/// - Another customer already has the same email (`DuplicateEmail`)
/// - The database insert operation fails
pub async fn create_customer(
    db: &DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
) -> Result<customer::Model> {
    let first_name = validate::required_text("firstName", &first_name, 2, 100)?;
    let last_name = validate::required_text("lastName", &last_name, 2, 100)?;
    let email = validate::email_syntax(&email)?;
    let phone = validate::phone_syntax(&phone)?;

    if get_customer_by_email(db, &email).await?.is_some() {
        return Err(Error::DuplicateEmail { email });
    }

    let customer = customer::ActiveModel {
        first_name: Set(first_name),
        last_name: Set(last_name),
        email: Set(email),
        phone: Set(phone),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    customer.insert(db).await.map_err(Into::into)
}

/// Updates an existing customer's name, email, and phone.
///
/// A missing customer is a no-op returning `Ok(None)` regardless of the
/// payload, so the existence check runs before validation; `id` and
/// `created_at` are never touched. The new email is rejected with
/// `DuplicateEmail` if it belongs to a different customer.
///
/// # Errors
/// Returns an error if validation fails, the email collides with another
/// customer, or the database update fails.
pub async fn update_customer(
    db: &DatabaseConnection,
    customer_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
) -> Result<Option<customer::Model>> {
    let Some(existing) = Customer::find_by_id(customer_id).one(db).await? else {
        return Ok(None);
    };

    let first_name = validate::required_text("firstName", &first_name, 2, 100)?;
    let last_name = validate::required_text("lastName", &last_name, 2, 100)?;
    let email = validate::email_syntax(&email)?;
    let phone = validate::phone_syntax(&phone)?;

    if let Some(holder) = get_customer_by_email(db, &email).await?
        && holder.id != customer_id
    {
        return Err(Error::DuplicateEmail { email });
    }

    let mut customer: customer::ActiveModel = existing.into();
    customer.first_name = Set(first_name);
    customer.last_name = Set(last_name);
    customer.email = Set(email);
    customer.phone = Set(phone);

    customer.update(db).await.map(Some).map_err(Into::into)
}

/// Customer deletion is disabled in this revision. Orders reference
/// customers, so a future implementation must block or cascade-check first.
///
/// # Errors
/// Always returns `Error::Unsupported`.
pub async fn delete_customer(_db: &DatabaseConnection, _customer_id: i64) -> Result<()> {
    Err(Error::Unsupported {
        operation: "customer deletion".to_string(),
    })
}
