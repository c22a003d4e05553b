//! Bakery API: bakeries and their baked goods over HTTP, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use models::{BakedGood, Bakery, BakeryChanges, NewBakedGood};
pub use routes::{app, common_routes, resource_routes};
pub use seed::seed_demo_data;
pub use state::AppState;
pub use store::Store;
