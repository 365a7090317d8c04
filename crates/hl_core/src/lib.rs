pub mod aggregate;
pub mod app_error;
pub mod canon_json;
pub mod config;
pub mod geometry;
pub mod hashing;
pub mod keys;
pub mod services;
pub mod types;

pub use app_error::AppError;
pub use types::BoundingBox;
