//! Unified error types for `orderdesk`.
//!
//! Business-rule failures (not-found, validation, duplicate email, stock
//! shortfalls) carry enough context to produce a caller-facing message.
//! Infrastructure faults (`Database`, `Io`) are kept as distinct variants so
//! callers can tell "no data" apart from "could not reach data".

use thiserror::Error;

/// All error conditions produced by the orderdesk core.
#[derive(Debug, Error)]
pub enum Error {
    /// No customer exists with the given id.
    #[error("Customer {id} not found")]
    CustomerNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// No product exists with the given id.
    #[error("Product {id} not found")]
    ProductNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// No order exists with the given id.
    #[error("Order {id} not found")]
    OrderNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// A field-level constraint was violated (length, format, required).
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The offending field
        field: String,
        /// What the caller must correct
        message: String,
    },

    /// A customer with the same email already exists.
    #[error("A customer with email {email} already exists")]
    DuplicateEmail {
        /// The colliding email address
        email: String,
    },

    /// An order placement request was malformed before touching storage.
    #[error("Invalid order request: {message}")]
    InvalidRequest {
        /// Why the request was rejected
        message: String,
    },

    /// A requested quantity exceeds the product's available stock.
    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Name of the product that could not be fulfilled
        product: String,
        /// Quantity the caller asked for
        requested: f64,
        /// Quantity actually on hand
        available: f64,
    },

    /// The operation is intentionally disabled in this revision.
    #[error("Operation not supported: {operation}")]
    Unsupported {
        /// The disabled operation
        operation: String,
    },

    /// Configuration error (missing or malformed config file, bad settings).
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Storage-layer fault; never masked as an empty result.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a business-rule failure that a presentation
    /// layer should report as a normal (non-5xx) outcome.
    #[must_use]
    pub const fn is_business_failure(&self) -> bool {
        matches!(
            self,
            Self::CustomerNotFound { .. }
                | Self::ProductNotFound { .. }
                | Self::OrderNotFound { .. }
                | Self::Validation { .. }
                | Self::DuplicateEmail { .. }
                | Self::InvalidRequest { .. }
                | Self::InsufficientStock { .. }
                | Self::Unsupported { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
