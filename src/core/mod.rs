//! Core business logic - framework-agnostic services over the persistent store.
//!
//! Each submodule is one service boundary: the product catalog, the customer
//! directory, the order placement workflow, and the read-only order query
//! service. All functions are async, operate on a `DatabaseConnection`, and
//! return typed `Result`s; nothing here knows about HTTP or rendering.

/// Product catalog service - CRUD over products
pub mod catalog;
/// Customer directory - CRUD over customers with email uniqueness
pub mod directory;
/// Order query service - read-only retrieval with related entities
pub mod orders;
/// Order placement workflow - the atomic multi-step transaction
pub mod placement;
/// Field-level validation helpers shared by the services
pub mod validate;
