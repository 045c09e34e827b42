//! Data models
//!
//! Wire format of the catalog. Field keys are the short names the client
//! application reads (`ti`, `pr`, `dispo`, …); Rust field names spell them out.

pub mod lot;
pub mod property;
pub mod serde_helpers;

// Re-exports
pub use lot::*;
pub use property::*;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::prefixed_id;

/// A catalog record type with a caller-supplied draft form.
///
/// Drafts carry every field except `id`; the service assigns the identifier
/// and builds the full record with [`CatalogItem::from_draft`].
pub trait CatalogItem: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Body accepted by create / update / bulk
    type Draft: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Identifier prefix (`p`, `lot`)
    const ID_PREFIX: &'static str;

    /// Identifier of this record
    fn id(&self) -> &str;

    /// Attach an identifier to a draft
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Fresh identifier for this kind
    fn generate_id() -> String {
        prefixed_id(Self::ID_PREFIX)
    }
}
