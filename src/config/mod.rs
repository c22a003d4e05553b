//! Runtime settings read from the process environment.

mod env;

pub use env::{AppConfig, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL};
