//! HTTP handlers for `/api/v1/sellers`.

use crate::{
    errors::AppError,
    extract::{Json, ListParams, Path, Query, Validated},
    models::seller::{NewSeller, Seller},
    services::seller_service,
    session::DbSession,
};

pub async fn create_seller(
    session: DbSession,
    Validated(new): Validated<NewSeller>,
) -> Result<Json<Seller>, AppError> {
    let mut conn = session.conn().await?;
    let seller = seller_service::create(&mut conn, &new).await?;
    tracing::info!(seller_id = seller.id, "seller created");
    Ok(Json(seller))
}

pub async fn read_seller(
    session: DbSession,
    Path(seller_id): Path<i64>,
) -> Result<Json<Seller>, AppError> {
    let mut conn = session.conn().await?;
    seller_service::get(&mut conn, seller_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Seller not found"))
}

pub async fn list_sellers(
    session: DbSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Seller>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    Ok(Json(seller_service::list(&mut conn, page).await?))
}

pub async fn delete_seller(
    session: DbSession,
    Path(seller_id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let mut conn = session.conn().await?;
    let Some(seller) = seller_service::get(&mut conn, seller_id).await? else {
        return Err(AppError::not_found("Seller not found"));
    };
    Ok(Json(seller_service::delete(&mut conn, &seller).await?))
}
