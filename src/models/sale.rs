//! Represents a completed sale of a car.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    errors::FieldError,
    validation::{self, Validate},
};

/// A sale ties one car to the seller who sold it and the buyer who bought it.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Sale {
    /// Generated identifier.
    pub id: i64,

    /// Foreign key to the sold car.
    pub car_id: i64,

    /// Foreign key to the seller.
    pub seller_id: i64,

    /// Foreign key to the buyer.
    pub buyer_id: i64,

    /// Agreed price, which may differ from the car's list price.
    pub price: f64,

    /// When the sale was recorded.
    pub sold_at: DateTime<Utc>,
}

/// Payload for `POST /api/v1/sales`. Car, seller and buyer must all exist.
#[derive(Deserialize, Debug, Clone)]
pub struct NewSale {
    pub car_id: i64,
    pub seller_id: i64,
    pub buyer_id: i64,
    pub price: f64,
}

impl Validate for NewSale {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::positive_price(&mut errors, "price", self.price);
        errors
    }
}
