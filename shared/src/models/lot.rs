//! Lot Development Model

use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Subdivided land offering (lotissement)
///
/// `available` is expected to stay at or below `total` but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotDevelopment {
    pub id: String,
    #[serde(rename = "loc")]
    pub location: String,
    #[serde(default)]
    pub zone: String,
    #[serde(rename = "lots", default)]
    pub total: i64,
    #[serde(rename = "dispo", default)]
    pub available: i64,
    #[serde(rename = "su", default)]
    pub surface: i64,
    #[serde(rename = "pr", default)]
    pub price: i64,
    #[serde(rename = "st", default = "default_status")]
    pub status: String,
    #[serde(rename = "fe", default)]
    pub features: Vec<String>,
}

/// Create / full-update payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotDraft {
    #[serde(rename = "loc")]
    pub location: String,
    #[serde(default)]
    pub zone: String,
    #[serde(rename = "lots", default)]
    pub total: i64,
    #[serde(rename = "dispo", default)]
    pub available: i64,
    #[serde(rename = "su", default)]
    pub surface: i64,
    #[serde(rename = "pr", default)]
    pub price: i64,
    #[serde(rename = "st", default = "default_status")]
    pub status: String,
    #[serde(rename = "fe", default)]
    pub features: Vec<String>,
}

impl From<LotDevelopment> for LotDraft {
    fn from(lot: LotDevelopment) -> Self {
        Self {
            location: lot.location,
            zone: lot.zone,
            total: lot.total,
            available: lot.available,
            surface: lot.surface,
            price: lot.price,
            status: lot.status,
            features: lot.features,
        }
    }
}

impl CatalogItem for LotDevelopment {
    type Draft = LotDraft;

    const ID_PREFIX: &'static str = "lot";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: LotDraft) -> Self {
        Self {
            id,
            location: draft.location,
            zone: draft.zone,
            total: draft.total,
            available: draft.available,
            surface: draft.surface,
            price: draft.price,
            status: draft.status,
            features: draft.features,
        }
    }
}

fn default_status() -> String {
    "Disponible".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_draft_takes_defaults() {
        let draft: LotDraft = serde_json::from_str(r#"{"loc":"Bambilor"}"#).unwrap();
        assert_eq!(draft.zone, "");
        assert_eq!(draft.total, 0);
        assert_eq!(draft.available, 0);
        assert_eq!(draft.status, "Disponible");
        assert!(draft.features.is_empty());
    }

    #[test]
    fn test_available_above_total_accepted() {
        let draft: LotDraft =
            serde_json::from_str(r#"{"loc":"Diass","lots":10,"dispo":25}"#).unwrap();
        let lot = LotDevelopment::from_draft("lot42".into(), draft);
        assert_eq!(lot.total, 10);
        assert_eq!(lot.available, 25);
    }

    #[test]
    fn test_wire_keys() {
        let draft: LotDraft =
            serde_json::from_str(r#"{"loc":"Thiès","zone":"Cité","lots":100,"dispo":72}"#)
                .unwrap();
        let json = serde_json::to_value(LotDevelopment::from_draft("lot2".into(), draft)).unwrap();
        assert_eq!(json["id"], "lot2");
        assert_eq!(json["loc"], "Thiès");
        assert_eq!(json["lots"], 100);
        assert_eq!(json["dispo"], 72);
        assert_eq!(json["st"], "Disponible");
    }

    #[test]
    fn test_draft_from_lot_drops_id() {
        let draft: LotDraft = serde_json::from_str(r#"{"loc":"Diass"}"#).unwrap();
        let lot = LotDevelopment::from_draft("lot3".into(), draft);
        let draft = LotDraft::from(lot.clone());
        assert_eq!(LotDevelopment::from_draft("lot3".into(), draft), lot);
    }
}
