//! Stock operations. A stock row records how many units of one car the
//! dealership holds; it always references an existing car.

use crate::models::stock::{NewStock, Stock};
use crate::services::{Page, StoreResult, delete_error, insert_error};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, car_id, quantity";

/// Insert a stock row and return it with its generated id.
///
/// Returns ReferenceNotFound if `car_id` does not point at a car.
pub async fn create(conn: &mut SqliteConnection, new: &NewStock) -> StoreResult<Stock> {
    sqlx::query_as::<_, Stock>(&format!(
        "INSERT INTO stocks (car_id, quantity) VALUES (?, ?) RETURNING {COLUMNS}"
    ))
    .bind(new.car_id)
    .bind(new.quantity)
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| insert_error(err, "stock"))
}

/// Fetch a stock by id. Absence is `Ok(None)`.
pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Stock>> {
    let stock = sqlx::query_as::<_, Stock>(&format!("SELECT {COLUMNS} FROM stocks WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(stock)
}

/// Fetch the first stock row recorded for a car.
pub async fn get_by_car(conn: &mut SqliteConnection, car_id: i64) -> StoreResult<Option<Stock>> {
    let stock = sqlx::query_as::<_, Stock>(&format!(
        "SELECT {COLUMNS} FROM stocks WHERE car_id = ? ORDER BY id ASC LIMIT 1"
    ))
    .bind(car_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(stock)
}

/// List stocks in insertion order.
pub async fn list(conn: &mut SqliteConnection, page: Page) -> StoreResult<Vec<Stock>> {
    let stocks = sqlx::query_as::<_, Stock>(&format!(
        "SELECT {COLUMNS} FROM stocks ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(stocks)
}

/// Remove a stock row. Returns whether a row was deleted.
pub async fn delete(conn: &mut SqliteConnection, stock: &Stock) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM stocks WHERE id = ?")
        .bind(stock.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| delete_error(err, "stock"))?;
    Ok(result.rows_affected() == 1)
}
