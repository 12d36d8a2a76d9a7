//! HTTP handlers for `/api/v1/buyers`.

use crate::{
    errors::AppError,
    extract::{Json, ListParams, Path, Query, Validated},
    models::buyer::{NewBuyer, Buyer},
    services::buyer_service,
    session::DbSession,
};

pub async fn create_buyer(
    session: DbSession,
    Validated(new): Validated<NewBuyer>,
) -> Result<Json<Buyer>, AppError> {
    let mut conn = session.conn().await?;
    let buyer = buyer_service::create(&mut conn, &new).await?;
    tracing::info!(buyer_id = buyer.id, "buyer created");
    Ok(Json(buyer))
}

pub async fn read_buyer(
    session: DbSession,
    Path(buyer_id): Path<i64>,
) -> Result<Json<Buyer>, AppError> {
    let mut conn = session.conn().await?;
    buyer_service::get(&mut conn, buyer_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Buyer not found"))
}

pub async fn list_buyers(
    session: DbSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Buyer>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    Ok(Json(buyer_service::list(&mut conn, page).await?))
}

pub async fn delete_buyer(
    session: DbSession,
    Path(buyer_id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let mut conn = session.conn().await?;
    let Some(buyer) = buyer_service::get(&mut conn, buyer_id).await? else {
        return Err(AppError::not_found("Buyer not found"));
    };
    Ok(Json(buyer_service::delete(&mut conn, &buyer).await?))
}
