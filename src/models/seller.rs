//! Represents a salesperson.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    errors::FieldError,
    validation::{self, Validate},
};

#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Seller {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewSeller {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Validate for NewSeller {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::non_empty(&mut errors, "name", &self.name);
        validation::max_len(&mut errors, "name", &self.name, 200);
        validation::email(&mut errors, "email", &self.email);
        if let Some(phone) = &self.phone {
            validation::max_len(&mut errors, "phone", phone, 32);
        }
        errors
    }
}
