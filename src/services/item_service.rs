//! Item operations. Items belong to a user through `owner_id`.

use crate::models::item::{Item, NewItem};
use crate::services::{Page, StoreResult, delete_error, insert_error};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, title, description, owner_id";

pub async fn create(conn: &mut SqliteConnection, new: &NewItem) -> StoreResult<Item> {
    sqlx::query_as::<_, Item>(&format!(
        "INSERT INTO items (title, description, owner_id) VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(new.title.trim())
    .bind(new.description.as_deref())
    .bind(new.owner_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| insert_error(err, "item"))
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Item>> {
    let item = sqlx::query_as::<_, Item>(&format!("SELECT {COLUMNS} FROM items WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(item)
}

/// All items of one owner, oldest first. A user may own many items, so this
/// is a list rather than a single-row lookup.
pub async fn list_by_owner(
    conn: &mut SqliteConnection,
    owner_id: i64,
    page: Page,
) -> StoreResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(&format!(
        "SELECT {COLUMNS} FROM items WHERE owner_id = ? ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(owner_id)
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(items)
}

pub async fn list(conn: &mut SqliteConnection, page: Page) -> StoreResult<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(&format!(
        "SELECT {COLUMNS} FROM items ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(items)
}

pub async fn delete(conn: &mut SqliteConnection, item: &Item) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(item.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| delete_error(err, "item"))?;
    Ok(result.rows_affected() == 1)
}
