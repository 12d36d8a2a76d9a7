pub mod admin_handlers;
pub mod buyer_handlers;
pub mod car_handlers;
pub mod health_handlers;
pub mod item_handlers;
pub mod sale_handlers;
pub mod seller_handlers;
pub mod stock_handlers;
pub mod user_handlers;
