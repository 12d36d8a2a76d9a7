//! Represents an item owned by a user.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    errors::FieldError,
    validation::{self, Validate},
};

#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Foreign key to the owning user.
    pub owner_id: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: i64,
}

impl Validate for NewItem {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::non_empty(&mut errors, "title", &self.title);
        validation::max_len(&mut errors, "title", &self.title, 200);
        if let Some(description) = &self.description {
            validation::max_len(&mut errors, "description", description, 2000);
        }
        errors
    }
}
