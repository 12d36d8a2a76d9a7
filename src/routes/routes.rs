//! Defines routes for all dealership resources.
//!
//! ## Structure
//! - **Probes** (root, outside the session scope)
//!   - `GET /healthz`, `GET /readyz`
//!
//! - **Resources** under `/api/v1`, one group per entity
//!   - `POST   /{resource}` create
//!   - `GET    /{resource}?skip=&limit=` list
//!   - `GET    /{resource}/{id}` read
//!   - `DELETE /{resource}/{id}` delete
//!   - `GET    /users/email/{email}`, `/items/owner/{owner_id}`,
//!     `/stocks/car/{car_id}`, `/sales/car/{car_id}` lookups by relation
//!
//! - **Admin** under `/admin`, gated by the `x-token` header
//!   - `POST /admin`, `GET /admin/sessions`, `GET /admin/teapot`
//!
//! Every resource and admin request runs inside one scoped database session.
//! A trailing slash is trimmed before routing, so `/api/v1/stocks/` and
//! `/admin/` reach the same handlers as their bare forms.

use crate::{
    errors::AppError,
    handlers::{
        admin_handlers::{admin_greeting, session_stats, teapot},
        buyer_handlers::{create_buyer, delete_buyer, list_buyers, read_buyer},
        car_handlers::{create_car, delete_car, list_cars, read_car},
        health_handlers::{healthz, readyz},
        item_handlers::{create_item, delete_item, list_items, list_items_by_owner, read_item},
        sale_handlers::{create_sale, delete_sale, list_sales, read_sale, read_sale_by_car},
        seller_handlers::{create_seller, delete_seller, list_sellers, read_seller},
        stock_handlers::{create_stock, delete_stock, list_stocks, read_stock, read_stock_by_car},
        user_handlers::{create_user, delete_user, list_users, read_user, read_user_by_email},
    },
    policy::require_admin_token,
    session::scoped_session,
    state::AppState,
};
use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, normalize_path::NormalizePath,
    trace::TraceLayer,
};

pub const API_V1_PREFIX: &str = "/api/v1";

/// The served application: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Build the full application router.
///
/// Layer order, outermost first: path normalization, tracing, CORS, session
/// scope, panic catcher. Normalization wraps the router itself because route
/// matching happens before any router layer runs. The panic catcher sits
/// inside the session scope so a panicking handler still yields a response
/// before the session is released.
pub fn app(state: AppState, cors: CorsLayer) -> App {
    let scoped = Router::new()
        .nest(API_V1_PREFIX, api_routes())
        .merge(admin_routes(&state))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            scoped_session,
        ));

    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(scoped)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

/// All resource groups, relative to [`API_V1_PREFIX`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(item_routes())
        .merge(car_routes())
        .merge(stock_routes())
        .merge(seller_routes())
        .merge(buyer_routes())
        .merge(sale_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/{user_id}", get(read_user).delete(delete_user))
        .route("/users/email/{email}", get(read_user_by_email))
}

fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(create_item).get(list_items))
        .route("/items/{item_id}", get(read_item).delete(delete_item))
        .route("/items/owner/{owner_id}", get(list_items_by_owner))
}

fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/cars", post(create_car).get(list_cars))
        .route("/cars/{car_id}", get(read_car).delete(delete_car))
}

fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/stocks", post(create_stock).get(list_stocks))
        .route("/stocks/{stock_id}", get(read_stock).delete(delete_stock))
        .route("/stocks/car/{car_id}", get(read_stock_by_car))
}

fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/sellers", post(create_seller).get(list_sellers))
        .route("/sellers/{seller_id}", get(read_seller).delete(delete_seller))
}

fn buyer_routes() -> Router<AppState> {
    Router::new()
        .route("/buyers", post(create_buyer).get(list_buyers))
        .route("/buyers/{buyer_id}", get(read_buyer).delete(delete_buyer))
}

fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/sales", post(create_sale).get(list_sales))
        .route("/sales/{sale_id}", get(read_sale).delete(delete_sale))
        .route("/sales/car/{car_id}", get(read_sale_by_car))
}

/// Admin group. The token check is a route layer, so it only wraps matched
/// admin routes and runs before their handlers.
fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", post(admin_greeting))
        .route("/admin/sessions", get(session_stats))
        .route("/admin/teapot", get(teapot))
        .route_layer(middleware::from_fn_with_state(
            state.admin.clone(),
            require_admin_token,
        ))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(panic = %detail, "handler panicked");
    AppError::internal("internal server error").into_response()
}
