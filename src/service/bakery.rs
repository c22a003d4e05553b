use crate::error::AppError;
use crate::models::{BakedGood, Bakery, BakeryChanges};
use crate::sql::{
    select_all_baked_goods, select_baked_goods_by_bakery, select_bakeries, select_bakery_by_id, update_bakery,
};
use chrono::Utc;
use sqlx::SqliteConnection;
use std::collections::HashMap;

pub struct BakeryService;

impl BakeryService {
    /// All bakeries in id order, each paired with its baked goods.
    /// Two statements regardless of table size: bakeries, then every baked good grouped in memory.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<(Bakery, Vec<BakedGood>)>, AppError> {
        let sql = select_bakeries();
        tracing::debug!(sql = %sql, "query");
        let bakeries: Vec<Bakery> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;

        let sql = select_all_baked_goods();
        tracing::debug!(sql = %sql, "query");
        let goods: Vec<BakedGood> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
        let mut goods_by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
        for good in goods {
            goods_by_bakery.entry(good.bakery_id).or_default().push(good);
        }

        Ok(bakeries
            .into_iter()
            .map(|b| {
                let goods = goods_by_bakery.remove(&b.id).unwrap_or_default();
                (b, goods)
            })
            .collect())
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Bakery>, AppError> {
        let sql = select_bakery_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as(&sql).bind(id).fetch_optional(&mut *conn).await?;
        Ok(row)
    }

    /// Baked goods of a single bakery.
    pub async fn baked_goods_for(conn: &mut SqliteConnection, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        let sql = select_baked_goods_by_bakery();
        tracing::debug!(sql = %sql, bakery_id, "query");
        let rows = sqlx::query_as(&sql).bind(bakery_id).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// Apply `changes` in a single UPDATE. Returns the updated row, or None if the id is unknown.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        changes: &BakeryChanges,
    ) -> Result<Option<Bakery>, AppError> {
        let mut q = update_bakery(id, changes, Utc::now());
        tracing::debug!(sql = %q.sql(), id, "update");
        let row = q.build_query_as().fetch_optional(&mut *conn).await?;
        Ok(row)
    }
}
