//! SQL for the bakery tables: static statements plus `QueryBuilder`s where the shape depends on input.

mod builder;
pub use builder::*;
