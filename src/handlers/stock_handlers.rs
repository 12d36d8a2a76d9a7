//! HTTP handlers for `/api/v1/stocks`.

use crate::{
    errors::AppError,
    extract::{Json, ListParams, Path, Query, Validated},
    models::stock::{NewStock, Stock},
    services::{car_service, stock_service},
    session::DbSession,
};

/// POST `/stocks`: the referenced car must exist; nothing is inserted otherwise.
pub async fn create_stock(
    session: DbSession,
    Validated(new): Validated<NewStock>,
) -> Result<Json<Stock>, AppError> {
    let mut conn = session.conn().await?;
    if car_service::get(&mut conn, new.car_id).await?.is_none() {
        return Err(AppError::not_found("Car not found"));
    }
    let stock = stock_service::create(&mut conn, &new).await?;
    tracing::info!(stock_id = stock.id, car_id = stock.car_id, "stock created");
    Ok(Json(stock))
}

/// GET `/stocks/{stock_id}`
pub async fn read_stock(
    session: DbSession,
    Path(stock_id): Path<i64>,
) -> Result<Json<Stock>, AppError> {
    let mut conn = session.conn().await?;
    stock_service::get(&mut conn, stock_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Stock not found"))
}

/// GET `/stocks/car/{car_id}`
pub async fn read_stock_by_car(
    session: DbSession,
    Path(car_id): Path<i64>,
) -> Result<Json<Stock>, AppError> {
    let mut conn = session.conn().await?;
    stock_service::get_by_car(&mut conn, car_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Stock not found"))
}

/// GET `/stocks?skip=&limit=`
pub async fn list_stocks(
    session: DbSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Stock>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    Ok(Json(stock_service::list(&mut conn, page).await?))
}

/// DELETE `/stocks/{stock_id}`: 404 unless the stock exists; body is the delete result.
pub async fn delete_stock(
    session: DbSession,
    Path(stock_id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let mut conn = session.conn().await?;
    let Some(stock) = stock_service::get(&mut conn, stock_id).await? else {
        return Err(AppError::not_found("Stock not found"));
    };
    let deleted = stock_service::delete(&mut conn, &stock).await?;
    tracing::info!(stock_id, deleted, "stock deleted");
    Ok(Json(deleted))
}
