//! HTTP handlers for `/api/v1/sales`.

use crate::{
    errors::AppError,
    extract::{Json, ListParams, Path, Query, Validated},
    models::sale::{NewSale, Sale},
    services::{buyer_service, car_service, sale_service, seller_service},
    session::DbSession,
};

/// POST `/sales`: car, seller and buyer are each checked before the insert.
pub async fn create_sale(
    session: DbSession,
    Validated(new): Validated<NewSale>,
) -> Result<Json<Sale>, AppError> {
    let mut conn = session.conn().await?;
    if car_service::get(&mut conn, new.car_id).await?.is_none() {
        return Err(AppError::not_found("Car not found"));
    }
    if seller_service::get(&mut conn, new.seller_id).await?.is_none() {
        return Err(AppError::not_found("Seller not found"));
    }
    if buyer_service::get(&mut conn, new.buyer_id).await?.is_none() {
        return Err(AppError::not_found("Buyer not found"));
    }
    let sale = sale_service::create(&mut conn, &new).await?;
    tracing::info!(sale_id = sale.id, car_id = sale.car_id, "sale recorded");
    Ok(Json(sale))
}

pub async fn read_sale(
    session: DbSession,
    Path(sale_id): Path<i64>,
) -> Result<Json<Sale>, AppError> {
    let mut conn = session.conn().await?;
    sale_service::get(&mut conn, sale_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Sale not found"))
}

pub async fn read_sale_by_car(
    session: DbSession,
    Path(car_id): Path<i64>,
) -> Result<Json<Sale>, AppError> {
    let mut conn = session.conn().await?;
    sale_service::get_by_car(&mut conn, car_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Sale not found"))
}

pub async fn list_sales(
    session: DbSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Sale>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    Ok(Json(sale_service::list(&mut conn, page).await?))
}

pub async fn delete_sale(
    session: DbSession,
    Path(sale_id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let mut conn = session.conn().await?;
    let Some(sale) = sale_service::get(&mut conn, sale_id).await? else {
        return Err(AppError::not_found("Sale not found"));
    };
    Ok(Json(sale_service::delete(&mut conn, &sale).await?))
}
