//! Builds SELECT, INSERT, UPDATE, DELETE statements for `bakeries` and `baked_goods`.
//! Identifiers are fixed here; every value is bound as a parameter.

use crate::models::BakeryChanges;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};

pub const BAKERIES: &str = "bakeries";
pub const BAKED_GOODS: &str = "baked_goods";

pub const BAKERY_COLUMNS: &str = "id, name, created_at, updated_at";
pub const BAKED_GOOD_COLUMNS: &str = "id, name, price, bakery_id, created_at, updated_at";

/// Descending price, lowest id first among equal prices.
const PRICE_ORDER: &str = "price DESC, id ASC";

/// Every bakery in id order.
pub fn select_bakeries() -> String {
    format!("SELECT {} FROM {} ORDER BY id", BAKERY_COLUMNS, BAKERIES)
}

/// One bakery by primary key. Caller binds the id.
pub fn select_bakery_by_id() -> String {
    format!("SELECT {} FROM {} WHERE id = ?", BAKERY_COLUMNS, BAKERIES)
}

pub fn bakery_exists() -> String {
    format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", BAKERIES)
}

/// Every baked good, grouped by bakery then id. Backs the full bakery listing.
pub fn select_all_baked_goods() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY bakery_id, id",
        BAKED_GOOD_COLUMNS, BAKED_GOODS
    )
}

/// Baked goods of one bakery in id order. Caller binds the bakery id.
pub fn select_baked_goods_by_bakery() -> String {
    format!(
        "SELECT {} FROM {} WHERE bakery_id = ? ORDER BY id",
        BAKED_GOOD_COLUMNS, BAKED_GOODS
    )
}

/// Baked goods by price, optionally capped to the first `limit` rows.
pub fn select_baked_goods_by_price(limit: Option<u32>) -> String {
    let limit_clause = limit.map(|n| format!(" LIMIT {}", n)).unwrap_or_default();
    format!(
        "SELECT {} FROM {} ORDER BY {}{}",
        BAKED_GOOD_COLUMNS, BAKED_GOODS, PRICE_ORDER, limit_clause
    )
}

/// Binds: name, price, bakery_id, created_at, updated_at.
pub fn insert_baked_good() -> String {
    format!(
        "INSERT INTO {} (name, price, bakery_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING {}",
        BAKED_GOODS, BAKED_GOOD_COLUMNS
    )
}

/// UPDATE by id: SET only the fields present in `changes`, always bumping `updated_at`.
pub fn update_bakery(id: i64, changes: &BakeryChanges, now: DateTime<Utc>) -> QueryBuilder<'static, Sqlite> {
    let mut q = QueryBuilder::new(format!("UPDATE {} SET ", BAKERIES));
    let mut sets = q.separated(", ");
    if let Some(name) = &changes.name {
        sets.push("name = ");
        sets.push_bind_unseparated(name.clone());
    }
    sets.push("updated_at = ");
    sets.push_bind_unseparated(now);
    q.push(" WHERE id = ");
    q.push_bind(id);
    q.push(" RETURNING ");
    q.push(BAKERY_COLUMNS);
    q
}

/// DELETE by id, returning the id when a row was removed.
pub fn delete_baked_good() -> String {
    format!("DELETE FROM {} WHERE id = ? RETURNING id", BAKED_GOODS)
}
