//! Property Model

use serde::{Deserialize, Serialize};

use super::CatalogItem;
use super::serde_helpers::none_as_null;

/// Default listing agent
pub const DEFAULT_AGENT_NAME: &str = "Mame Cheikh Ndiaye";
pub const DEFAULT_AGENT_PHONE: &str = "+221 77 709 61 44";

/// Agent contact embedded in every property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "na", default = "default_agent_name")]
    pub name: String,
    #[serde(rename = "ph", default = "default_agent_phone")]
    pub phone: String,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            phone: default_agent_phone(),
        }
    }
}

/// Video attached to a listing (`type` is e.g. `youtube` or `file`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "type")]
    pub kind: String,
    pub src: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Property entity (公寓、别墅、地块)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    #[serde(rename = "ti")]
    pub title: String,
    /// `null` is kept as sent; an absent key reads as `""`
    #[serde(
        rename = "de",
        default = "default_description",
        serialize_with = "none_as_null"
    )]
    pub description: Option<String>,
    #[serde(rename = "ty", default = "default_property_type")]
    pub property_type: String,
    #[serde(rename = "tr", default = "default_transaction")]
    pub transaction: String,
    #[serde(rename = "pr", default)]
    pub price: i64,
    #[serde(rename = "nb", default)]
    pub neighborhood: String,
    #[serde(rename = "su", default)]
    pub surface: i64,
    #[serde(rename = "ro", default)]
    pub rooms: i64,
    #[serde(rename = "be", default)]
    pub bedrooms: i64,
    #[serde(rename = "ba", default)]
    pub bathrooms: i64,
    #[serde(rename = "fe", default)]
    pub features: Vec<String>,
    #[serde(rename = "im", default)]
    pub images: Vec<String>,
    #[serde(rename = "vd", default)]
    pub videos: Vec<Video>,
    #[serde(rename = "ft", default)]
    pub featured: bool,
    #[serde(rename = "vi", default)]
    pub views: i64,
    #[serde(rename = "ag", default)]
    pub agent: Agent,
}

/// Create / full-update payload (everything but `id`)
///
/// Fields left out of a PUT body take these defaults; nothing is merged with
/// the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDraft {
    #[serde(rename = "ti")]
    pub title: String,
    #[serde(
        rename = "de",
        default = "default_description",
        serialize_with = "none_as_null"
    )]
    pub description: Option<String>,
    #[serde(rename = "ty", default = "default_property_type")]
    pub property_type: String,
    #[serde(rename = "tr", default = "default_transaction")]
    pub transaction: String,
    #[serde(rename = "pr", default)]
    pub price: i64,
    #[serde(rename = "nb", default)]
    pub neighborhood: String,
    #[serde(rename = "su", default)]
    pub surface: i64,
    #[serde(rename = "ro", default)]
    pub rooms: i64,
    #[serde(rename = "be", default)]
    pub bedrooms: i64,
    #[serde(rename = "ba", default)]
    pub bathrooms: i64,
    #[serde(rename = "fe", default)]
    pub features: Vec<String>,
    #[serde(rename = "im", default)]
    pub images: Vec<String>,
    #[serde(rename = "vd", default)]
    pub videos: Vec<Video>,
    #[serde(rename = "ft", default)]
    pub featured: bool,
    #[serde(rename = "vi", default)]
    pub views: i64,
    #[serde(rename = "ag", default)]
    pub agent: Agent,
}

impl PropertyDraft {
    /// Draft with only a title; every other field at its default
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: default_description(),
            property_type: default_property_type(),
            transaction: default_transaction(),
            price: 0,
            neighborhood: String::new(),
            surface: 0,
            rooms: 0,
            bedrooms: 0,
            bathrooms: 0,
            features: Vec::new(),
            images: Vec::new(),
            videos: Vec::new(),
            featured: false,
            views: 0,
            agent: Agent::default(),
        }
    }
}

impl CatalogItem for Property {
    type Draft = PropertyDraft;

    const ID_PREFIX: &'static str = "p";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: PropertyDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            property_type: draft.property_type,
            transaction: draft.transaction,
            price: draft.price,
            neighborhood: draft.neighborhood,
            surface: draft.surface,
            rooms: draft.rooms,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            features: draft.features,
            images: draft.images,
            videos: draft.videos,
            featured: draft.featured,
            views: draft.views,
            agent: draft.agent,
        }
    }
}

fn default_agent_name() -> String {
    DEFAULT_AGENT_NAME.to_string()
}

fn default_agent_phone() -> String {
    DEFAULT_AGENT_PHONE.to_string()
}

fn default_description() -> Option<String> {
    Some(String::new())
}

fn default_property_type() -> String {
    "Appartement".to_string()
}

fn default_transaction() -> String {
    "Vente".to_string()
}
