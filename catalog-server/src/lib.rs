//! catalog-server: listing catalog backend
//!
//! Serves properties and lot developments over a JSON HTTP API backed by
//! SurrealDB:
//! - CRUD per record, bulk replace per collection
//! - reset to the built-in dataset
//! - inline data-URL encoding of uploads

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
