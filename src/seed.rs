//! Demo data for an empty store. Bakeries have no create route, so a fresh database is seeded here.

use crate::error::AppError;
use crate::sql::{insert_baked_good, BAKERIES};
use crate::store::Store;
use chrono::Utc;

const DEMO_BAKERIES: &[(&str, &[(&str, f64)])] = &[
    (
        "Delightful donuts",
        &[("Chocolate dipped donut", 2.75), ("Apple-spice filled donut", 3.5)],
    ),
    (
        "Incredible crullers",
        &[("Glazed honey cruller", 3.25), ("Chocolate cruller", 2.5)],
    ),
    ("Rosemary & Rye", &[("Sourdough loaf", 8.0), ("Rye focaccia", 6.5)]),
];

/// Insert the demo bakeries and their baked goods in one transaction.
/// Returns the number of bakeries inserted; does nothing if any bakery already exists.
pub async fn seed_demo_data(store: &Store) -> Result<usize, AppError> {
    let mut tx = store.begin().await?;
    let existing: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", BAKERIES))
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "store already has bakeries; skipping seed");
        return Ok(0);
    }

    let insert_bakery = format!(
        "INSERT INTO {} (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING id",
        BAKERIES
    );
    let insert_good = insert_baked_good();
    let now = Utc::now();
    for (name, goods) in DEMO_BAKERIES {
        let bakery_id: i64 = sqlx::query_scalar(&insert_bakery)
            .bind(*name)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;
        for (good, price) in goods.iter() {
            sqlx::query(&insert_good)
                .bind(*good)
                .bind(*price)
                .bind(bakery_id)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        }
    }
    tx.commit().await?;
    tracing::info!(bakeries = DEMO_BAKERIES.len(), "seeded demo data");
    Ok(DEMO_BAKERIES.len())
}
