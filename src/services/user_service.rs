//! User operations.

use crate::models::user::{NewUser, User};
use crate::services::{Page, StoreResult, delete_error, insert_error};
use sqlx::SqliteConnection;

const COLUMNS: &str = "id, email, full_name, is_active";

/// Insert a user. Returns Conflict when the email is already registered.
pub async fn create(conn: &mut SqliteConnection, new: &NewUser) -> StoreResult<User> {
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (email, full_name, is_active) VALUES (?, ?, ?) RETURNING {COLUMNS}"
    ))
    .bind(new.email.trim().to_lowercase())
    .bind(new.full_name.trim())
    .bind(new.is_active)
    .fetch_one(&mut *conn)
    .await
    .map_err(|err| insert_error(err, "user"))
}

pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(user)
}

/// Lookup by email; emails are stored lowercased.
pub async fn get_by_email(conn: &mut SqliteConnection, email: &str) -> StoreResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE email = ?"))
        .bind(email.trim().to_lowercase())
        .fetch_optional(&mut *conn)
        .await?;
    Ok(user)
}

pub async fn list(conn: &mut SqliteConnection, page: Page) -> StoreResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM users ORDER BY id ASC LIMIT ? OFFSET ?"
    ))
    .bind(page.limit)
    .bind(page.offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(users)
}

pub async fn delete(conn: &mut SqliteConnection, user: &User) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user.id)
        .execute(&mut *conn)
        .await
        .map_err(|err| delete_error(err, "user"))?;
    Ok(result.rows_affected() == 1)
}
