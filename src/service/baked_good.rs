use crate::error::AppError;
use crate::models::{BakedGood, NewBakedGood};
use crate::sql::{bakery_exists, delete_baked_good, insert_baked_good, select_baked_goods_by_price};
use chrono::Utc;
use sqlx::SqliteConnection;

pub struct BakedGoodService;

impl BakedGoodService {
    /// All baked goods, most expensive first; equal prices keep ascending id order.
    pub async fn by_price(conn: &mut SqliteConnection) -> Result<Vec<BakedGood>, AppError> {
        let sql = select_baked_goods_by_price(None);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// First row of the `by_price` ordering, or None when the table is empty.
    pub async fn most_expensive(conn: &mut SqliteConnection) -> Result<Option<BakedGood>, AppError> {
        let sql = select_baked_goods_by_price(Some(1));
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as(&sql).fetch_optional(&mut *conn).await?;
        Ok(row)
    }

    /// Insert one baked good. The owning bakery must exist.
    pub async fn create(conn: &mut SqliteConnection, new: &NewBakedGood) -> Result<BakedGood, AppError> {
        let exists: i64 = sqlx::query_scalar(&bakery_exists())
            .bind(new.bakery_id)
            .fetch_one(&mut *conn)
            .await?;
        if exists == 0 {
            return Err(AppError::BadRequest(format!(
                "Bakery {} does not exist in the database.",
                new.bakery_id
            )));
        }
        let sql = insert_baked_good();
        let now = Utc::now();
        tracing::debug!(sql = %sql, name = %new.name, "insert");
        let row = sqlx::query_as(&sql)
            .bind(new.name.as_str())
            .bind(new.price)
            .bind(new.bakery_id)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Delete by id. Returns false when no row matched.
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
        let sql = delete_baked_good();
        tracing::debug!(sql = %sql, id, "delete");
        let deleted: Option<i64> = sqlx::query_scalar(&sql).bind(id).fetch_optional(&mut *conn).await?;
        Ok(deleted.is_some())
    }
}
