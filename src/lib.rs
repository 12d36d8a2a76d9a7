//! Vehicle dealership REST API.
//!
//! Users, items, cars, stocks, sellers, buyers and sales over SQLite, with
//! one pooled connection scoped to each request (see [`session`]).

pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod validation;
