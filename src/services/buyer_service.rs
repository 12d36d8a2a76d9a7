//! Buyer operations.

use crate::models::buyer::{Buyer, NewBuyer};
use crate::services::{Page, StoreResult, delete_error, insert_error};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, name, email, phone";

pub async fn create(conn: &mut SqliteConnection, new: &NewBuyer) -> StoreResult<Buyer> {
    sqlx::query_as::<_, Buyer>(&format!(
        "INSERT INTO buyers (name, email, phone) VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(new.name.trim())
    .bind(new.email.trim().to_lowercase())
    .bind(new.phone.as_deref())
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| insert_error(err, "buyer"))
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Buyer>> {
    let buyer = sqlx::query_as::<_, Buyer>(&format!("SELECT {COLUMNS} FROM buyers WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(buyer)
}

pub async fn list(conn: &mut SqliteConnection, page: Page) -> StoreResult<Vec<Buyer>> {
    let buyers = sqlx::query_as::<_, Buyer>(&format!(
        "SELECT {COLUMNS} FROM buyers ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(buyers)
}

/// Fails with Conflict while sales still reference this buyer.
pub async fn delete(conn: &mut SqliteConnection, buyer: &Buyer) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM buyers WHERE id = ?")
        .bind(buyer.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| delete_error(err, "buyer"))?;
    Ok(result.rows_affected() == 1)
}
