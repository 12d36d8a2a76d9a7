//! Seller operations.

use crate::models::seller::{Seller, NewSeller};
use crate::services::{Page, StoreResult, delete_error, insert_error};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, name, email, phone";

pub async fn create(conn: &mut SqliteConnection, new: &NewSeller) -> StoreResult<Seller> {
    sqlx::query_as::<_, Seller>(&format!(
        "INSERT INTO sellers (name, email, phone) VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(new.name.trim())
    .bind(new.email.trim().to_lowercase())
    .bind(new.phone.as_deref())
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| insert_error(err, "seller"))
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Seller>> {
    let seller = sqlx::query_as::<_, Seller>(&format!("SELECT {COLUMNS} FROM sellers WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(seller)
}

pub async fn list(conn: &mut SqliteConnection, page: Page) -> StoreResult<Vec<Seller>> {
    let sellers = sqlx::query_as::<_, Seller>(&format!(
        "SELECT {COLUMNS} FROM sellers ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(sellers)
}

/// Fails with Conflict while sales still reference this seller.
pub async fn delete(conn: &mut SqliteConnection, seller: &Seller) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM sellers WHERE id = ?")
        .bind(seller.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| delete_error(err, "seller"))?;
    Ok(result.rows_affected() == 1)
}
