//! Common serde helpers for nullable wire fields

use serde::{Serialize, Serializer};

/// Serialize `None` as an explicit `null`
///
/// SurrealDB drops object fields that serialize as `NONE`, so a plain
/// `Option` would come back as absent. A unit value is stored as `NULL`.
pub fn none_as_null<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_unit(),
    }
}
