//! Users Domain
//!
//! An in-memory user directory: list (with optional name filter), get,
//! create with an auto-assigned id, and delete.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, OpenAPI doc
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Maps missing entries to NotFound
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Id assignment, duplicate check (trait + in-memory impl)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, CreateUser, UserFilter
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! // Create Axum router serving /users and /users/{user_id}
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ErrorDetail, UserError, UserResult};
pub use models::{CreateUser, User, UserFilter};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
