//! Stock endpoints: reference checks, read-after-write, ordering, deletion.

mod common;

use axum::http::StatusCode;
use common::{count_rows, create_car, send, spawn_app};
use serde_json::json;

#[tokio::test]
async fn create_with_unknown_car_is_rejected_without_insert() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/v1/stocks",
        Some(json!({ "car_id": 4242, "quantity": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Car not found");
    assert_eq!(count_rows(&app.pool, "stocks").await, 0);
}

#[tokio::test]
async fn non_positive_car_ids_are_looked_up_like_any_other() {
    let app = spawn_app().await;

    for car_id in [0, -5] {
        let (status, body) = send(
            &app.router,
            "POST",
            "/api/v1/stocks",
            Some(json!({ "car_id": car_id, "quantity": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "car_id {car_id}");
        assert_eq!(body["error"], "Car not found");
    }
    assert_eq!(count_rows(&app.pool, "stocks").await, 0);
}

#[tokio::test]
async fn created_stock_reads_back_equal() {
    let app = spawn_app().await;
    let car_id = create_car(&app.router, "Toyota", "Corolla").await;

    let (status, created) = send(
        &app.router,
        "POST",
        "/api/v1/stocks",
        Some(json!({ "car_id": car_id, "quantity": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stock_id = created["id"].as_i64().expect("generated id");
    assert_eq!(created["car_id"], car_id);
    assert_eq!(created["quantity"], 7);

    let (status, fetched) = send(
        &app.router,
        "GET",
        &format!("/api/v1/stocks/{stock_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, by_car) = send(
        &app.router,
        "GET",
        &format!("/api/v1/stocks/car/{car_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_car, created);
}

#[tokio::test]
async fn trailing_slash_reaches_the_collection_routes() {
    let app = spawn_app().await;
    let car_id = create_car(&app.router, "Skoda", "Octavia").await;

    let (status, created) = send(
        &app.router,
        "POST",
        "/api/v1/stocks/",
        Some(json!({ "car_id": car_id, "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send(&app.router, "GET", "/api/v1/stocks/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn missing_stock_is_a_client_error() {
    let app = spawn_app().await;

    let (status, body) = send(&app.router, "GET", "/api/v1/stocks/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Stock not found");

    let (status, _) = send(&app.router, "GET", "/api/v1/stocks/car/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_insertion_order() {
    let app = spawn_app().await;

    let (status, empty) = send(&app.router, "GET", "/api/v1/stocks?skip=0&limit=100", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));

    let car_id = create_car(&app.router, "Honda", "Civic").await;
    let mut ids = Vec::new();
    for quantity in [5, 1, 9, 2] {
        let (_, stock) = send(
            &app.router,
            "POST",
            "/api/v1/stocks",
            Some(json!({ "car_id": car_id, "quantity": quantity })),
        )
        .await;
        ids.push(stock["id"].as_i64().unwrap());
    }

    let (_, listed) = send(&app.router, "GET", "/api/v1/stocks?skip=0&limit=100", None).await;
    let listed_ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed_ids, ids);

    let (_, window) = send(&app.router, "GET", "/api/v1/stocks?skip=1&limit=2", None).await;
    let quantities: Vec<i64> = window
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["quantity"].as_i64().unwrap())
        .collect();
    assert_eq!(quantities, vec![1, 9]);
}

#[tokio::test]
async fn delete_requires_existing_stock() {
    let app = spawn_app().await;
    let car_id = create_car(&app.router, "Mazda", "3").await;
    let (_, stock) = send(
        &app.router,
        "POST",
        "/api/v1/stocks",
        Some(json!({ "car_id": car_id, "quantity": 1 })),
    )
    .await;
    let uri = format!("/api/v1/stocks/{}", stock["id"]);

    let (status, deleted) = send(&app.router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!(true));

    let (status, _) = send(&app.router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app.router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Stock not found");
}

#[tokio::test]
async fn malformed_payloads_never_reach_the_store() {
    let app = spawn_app().await;
    let car_id = create_car(&app.router, "Kia", "Rio").await;

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/v1/stocks",
        Some(json!({ "car_id": car_id, "quantity": -4 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "quantity");

    let (status, _) = send(
        &app.router,
        "POST",
        "/api/v1/stocks",
        Some(json!({ "quantity": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app.router, "GET", "/api/v1/stocks/not-a-number", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(count_rows(&app.pool, "stocks").await, 0);
}

#[tokio::test]
async fn pagination_bounds_are_enforced() {
    let app = spawn_app().await;

    let (status, body) = send(&app.router, "GET", "/api/v1/stocks?skip=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "skip");

    let (status, _) = send(&app.router, "GET", "/api/v1/stocks?limit=0", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app.router, "GET", "/api/v1/stocks?limit=1000000", None).await;
    assert_eq!(status, StatusCode::OK);
}
