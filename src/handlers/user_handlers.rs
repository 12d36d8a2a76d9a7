//! HTTP handlers for `/api/v1/users`.

use crate::{
    errors::AppError,
    extract::{Json, ListParams, Path, Query, Validated},
    models::user::{NewUser, User},
    services::user_service,
    session::DbSession,
};

/// POST `/users`: 409 when the email is already registered.
pub async fn create_user(
    session: DbSession,
    Validated(new): Validated<NewUser>,
) -> Result<Json<User>, AppError> {
    let mut conn = session.conn().await?;
    let user = user_service::create(&mut conn, &new).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(Json(user))
}

pub async fn read_user(
    session: DbSession,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let mut conn = session.conn().await?;
    user_service::get(&mut conn, user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("User not found"))
}

pub async fn read_user_by_email(
    session: DbSession,
    Path(email): Path<String>,
) -> Result<Json<User>, AppError> {
    let mut conn = session.conn().await?;
    user_service::get_by_email(&mut conn, &email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("User not found"))
}

pub async fn list_users(
    session: DbSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<User>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    Ok(Json(user_service::list(&mut conn, page).await?))
}

pub async fn delete_user(
    session: DbSession,
    Path(user_id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let mut conn = session.conn().await?;
    let Some(user) = user_service::get(&mut conn, user_id).await? else {
        return Err(AppError::not_found("User not found"));
    };
    let deleted = user_service::delete(&mut conn, &user).await?;
    tracing::info!(user_id, deleted, "user deleted");
    Ok(Json(deleted))
}
