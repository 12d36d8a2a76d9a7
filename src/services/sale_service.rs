//! Sale operations. A sale references a car, a seller and a buyer; the
//! timestamp is assigned here, not by the client.

use crate::models::sale::{NewSale, Sale};
use crate::services::{Page, StoreResult, delete_error, insert_error};
use chrono::Utc;
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, car_id, seller_id, buyer_id, price, sold_at";

/// Record a sale, stamping `sold_at` with the current time.
pub async fn create(conn: &mut SqliteConnection, new: &NewSale) -> StoreResult<Sale> {
    sqlx::query_as::<_, Sale>(&format!(
        "INSERT INTO sales (car_id, seller_id, buyer_id, price, sold_at)
         VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(new.car_id)
    .bind(new.seller_id)
    .bind(new.buyer_id)
    .bind(new.price)
    .bind(Utc::now())
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| insert_error(err, "sale"))
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Sale>> {
    let sale = sqlx::query_as::<_, Sale>(&format!("SELECT {COLUMNS} FROM sales WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(sale)
}

/// First sale recorded for a car.
pub async fn get_by_car(conn: &mut SqliteConnection, car_id: i64) -> StoreResult<Option<Sale>> {
    let sale = sqlx::query_as::<_, Sale>(&format!(
        "SELECT {COLUMNS} FROM sales WHERE car_id = ? ORDER BY id ASC LIMIT 1"
    ))
    .bind(car_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(sale)
}

pub async fn list(conn: &mut SqliteConnection, page: Page) -> StoreResult<Vec<Sale>> {
    let sales = sqlx::query_as::<_, Sale>(&format!(
        "SELECT {COLUMNS} FROM sales ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(sales)
}

pub async fn delete(conn: &mut SqliteConnection, sale: &Sale) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM sales WHERE id = ?")
        .bind(sale.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| delete_error(err, "sale"))?;
    Ok(result.rows_affected() == 1)
}
