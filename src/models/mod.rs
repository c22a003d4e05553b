//! Row types for the `bakeries` and `baked_goods` tables and their JSON projections.

mod baked_good;
mod bakery;

pub use baked_good::{BakedGood, NewBakedGood};
pub use bakery::{Bakery, BakeryChanges};
