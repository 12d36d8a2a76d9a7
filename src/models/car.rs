//! Represents a car model offered by the dealership.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    errors::FieldError,
    validation::{self, Validate},
};

const MIN_YEAR: i32 = 1886;
const MAX_YEAR: i32 = 2100;

/// A car. Stocks and sales reference cars by `id`.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Car {
    /// Generated identifier.
    pub id: i64,

    /// Manufacturer (e.g. "Toyota").
    pub make: String,

    /// Model name (e.g. "Corolla").
    pub model: String,

    /// Model year.
    pub year: i32,

    /// List price.
    pub price: f64,
}

/// Payload for `POST /api/v1/cars`.
#[derive(Deserialize, Debug, Clone)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
}

impl Validate for NewCar {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::non_empty(&mut errors, "make", &self.make);
        validation::max_len(&mut errors, "make", &self.make, 100);
        validation::non_empty(&mut errors, "model", &self.model);
        validation::max_len(&mut errors, "model", &self.model, 100);
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            errors.push(FieldError::new(
                "year",
                format!("must be between {MIN_YEAR} and {MAX_YEAR}"),
            ));
        }
        validation::positive_price(&mut errors, "price", self.price);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_bad_field() {
        let car = NewCar {
            make: " ".into(),
            model: "Civic".into(),
            year: 1700,
            price: -1.0,
        };
        let fields: Vec<_> = car.field_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["make", "year", "price"]);
    }
}
