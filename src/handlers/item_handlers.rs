//! HTTP handlers for `/api/v1/items`.

use crate::{
    errors::AppError,
    extract::{Json, ListParams, Path, Query, Validated},
    models::item::{Item, NewItem},
    services::{item_service, user_service},
    session::DbSession,
};

/// POST `/items`: the owner must be an existing user.
pub async fn create_item(
    session: DbSession,
    Validated(new): Validated<NewItem>,
) -> Result<Json<Item>, AppError> {
    let mut conn = session.conn().await?;
    if user_service::get(&mut conn, new.owner_id).await?.is_none() {
        return Err(AppError::not_found("User not found"));
    }
    let item = item_service::create(&mut conn, &new).await?;
    tracing::info!(item_id = item.id, owner_id = item.owner_id, "item created");
    Ok(Json(item))
}

pub async fn read_item(
    session: DbSession,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>, AppError> {
    let mut conn = session.conn().await?;
    item_service::get(&mut conn, item_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Item not found"))
}

/// GET `/items/owner/{owner_id}`: 404 for an unknown owner, possibly empty list otherwise.
pub async fn list_items_by_owner(
    session: DbSession,
    Path(owner_id): Path<i64>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Item>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    if user_service::get(&mut conn, owner_id).await?.is_none() {
        return Err(AppError::not_found("User not found"));
    }
    Ok(Json(item_service::list_by_owner(&mut conn, owner_id, page).await?))
}

pub async fn list_items(
    session: DbSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Item>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    Ok(Json(item_service::list(&mut conn, page).await?))
}

pub async fn delete_item(
    session: DbSession,
    Path(item_id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let mut conn = session.conn().await?;
    let Some(item) = item_service::get(&mut conn, item_id).await? else {
        return Err(AppError::not_found("Item not found"));
    };
    Ok(Json(item_service::delete(&mut conn, &item).await?))
}
