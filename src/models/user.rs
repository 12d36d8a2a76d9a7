//! Represents a registered user of the dealership platform.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    errors::FieldError,
    validation::{self, Validate},
};

/// A user account. Emails are unique across all users.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct User {
    /// Generated identifier.
    pub id: i64,

    /// Login email, unique.
    pub email: String,

    /// Display name.
    pub full_name: String,

    /// Inactive users are kept but flagged.
    pub is_active: bool,
}

/// Payload for `POST /api/v1/users`.
#[derive(Deserialize, Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Validate for NewUser {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        validation::email(&mut errors, "email", &self.email);
        validation::max_len(&mut errors, "email", &self.email, 254);
        validation::non_empty(&mut errors, "full_name", &self.full_name);
        validation::max_len(&mut errors, "full_name", &self.full_name, 200);
        errors
    }
}
