//! Car operations.

use crate::models::car::{Car, NewCar};
use crate::services::{Page, StoreResult, delete_error, insert_error};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, make, model, year, price";

pub async fn create(conn: &mut SqliteConnection, new: &NewCar) -> StoreResult<Car> {
    sqlx::query_as::<_, Car>(&format!(
        "INSERT INTO cars (make, model, year, price) VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(new.make.trim())
    .bind(new.model.trim())
    .bind(new.year)
    .bind(new.price)
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| insert_error(err, "car"))
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Car>> {
    let car = sqlx::query_as::<_, Car>(&format!("SELECT {COLUMNS} FROM cars WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(car)
}

pub async fn list(conn: &mut SqliteConnection, page: Page) -> StoreResult<Vec<Car>> {
    let cars = sqlx::query_as::<_, Car>(&format!(
        "SELECT {COLUMNS} FROM cars ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(cars)
}

/// Remove a car. Fails with Conflict while stocks or sales still reference it.
pub async fn delete(conn: &mut SqliteConnection, car: &Car) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM cars WHERE id = ?")
        .bind(car.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| delete_error(err, "car"))?;
    Ok(result.rows_affected() == 1)
}
