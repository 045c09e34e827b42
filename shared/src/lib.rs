//! Shared types for the listing catalog
//!
//! Wire models, the built-in default dataset, identifier generation and the
//! unified error type used by `catalog-server` and its tests.

pub mod defaults;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Agent, LotDevelopment, LotDraft, Property, PropertyDraft, Video};
