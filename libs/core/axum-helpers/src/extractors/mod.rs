//! Custom extractors for Axum handlers.
//!
//! Every extractor here rejects with [`AppError`](crate::errors::AppError),
//! so malformed requests get the same error envelope across the API.

pub mod int_path;
pub mod json_body;
pub mod query_params;

pub use int_path::IntPath;
pub use json_body::JsonBody;
pub use query_params::QueryParams;
