//! Query execution for bakeries and baked goods. Every function runs on a caller-owned connection,
//! normally a handler's transaction.

mod baked_good;
mod bakery;
mod validation;
pub use baked_good::BakedGoodService;
pub use bakery::BakeryService;
pub use validation::RequestValidator;
