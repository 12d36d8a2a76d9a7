//! HTTP handlers for `/api/v1/cars`.

use crate::{
    errors::AppError,
    extract::{Json, ListParams, Path, Query, Validated},
    models::car::{Car, NewCar},
    services::car_service,
    session::DbSession,
};

pub async fn create_car(
    session: DbSession,
    Validated(new): Validated<NewCar>,
) -> Result<Json<Car>, AppError> {
    let mut conn = session.conn().await?;
    let car = car_service::create(&mut conn, &new).await?;
    tracing::info!(car_id = car.id, "car created");
    Ok(Json(car))
}

pub async fn read_car(session: DbSession, Path(car_id): Path<i64>) -> Result<Json<Car>, AppError> {
    let mut conn = session.conn().await?;
    car_service::get(&mut conn, car_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Car not found"))
}

pub async fn list_cars(
    session: DbSession,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Car>>, AppError> {
    let page = params.page()?;
    let mut conn = session.conn().await?;
    Ok(Json(car_service::list(&mut conn, page).await?))
}

/// DELETE `/cars/{car_id}`: 409 while stocks or sales still reference the car.
pub async fn delete_car(
    session: DbSession,
    Path(car_id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let mut conn = session.conn().await?;
    let Some(car) = car_service::get(&mut conn, car_id).await? else {
        return Err(AppError::not_found("Car not found"));
    };
    let deleted = car_service::delete(&mut conn, &car).await?;
    tracing::info!(car_id, deleted, "car deleted");
    Ok(Json(deleted))
}
