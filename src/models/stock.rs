//! Represents the stock level held for a car.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{errors::FieldError, validation::Validate};

/// Units of a given car available at the dealership.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Stock {
    /// Generated identifier.
    pub id: i64,

    /// Foreign key to the stocked car.
    pub car_id: i64,

    /// Units on hand.
    pub quantity: i64,
}

/// Payload for `POST /api/v1/stocks`. The car must already exist.
#[derive(Deserialize, Debug, Clone)]
pub struct NewStock {
    pub car_id: i64,
    pub quantity: i64,
}

impl Validate for NewStock {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.quantity < 0 {
            errors.push(FieldError::new("quantity", "must not be negative"));
        }
        errors
    }
}
