use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::error::ValidationError;

/// Fields a creation payload must carry. `category` doubles as the document
/// store's partition key, so a record cannot exist without it.
pub const REQUIRED_FIELDS: &[&str] = &["title", "category", "type"];

/// Optional fields that are written as explicit nulls when the caller
/// leaves them out, so every persisted document carries the full shape.
const NULLABLE_FIELDS: &[&str] =
    &["release_year", "rating", "duration", "director", "cover_url"];

/// Render an instant as the ISO-8601 UTC string used for all document and
/// response timestamps.
pub fn utc_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// A validated-in-stages creation payload for a catalog record.
///
/// Parsing rejects anything that is not a JSON object; validation reports
/// every missing required field at once; shaping produces the document that
/// is persisted verbatim, extra pass-through fields included.
#[derive(Debug, Clone)]
pub struct NewTitle {
    body: Map<String, Value>,
}

impl NewTitle {
    pub fn parse(raw: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(raw).map_err(|_| ValidationError::MalformedPayload)?;
        match value {
            Value::Object(body) => Ok(Self { body }),
            _ => Err(ValidationError::MalformedPayload),
        }
    }

    /// Presence check only: a required field supplied as `null` is still
    /// present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !self.body.contains_key(**field))
            .map(|field| (*field).to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields {
                missing,
                required: REQUIRED_FIELDS,
            })
        }
    }

    /// Shape the document to persist: caller fields verbatim, generated
    /// `id`, both timestamps stamped with the same instant, `description`
    /// defaulted to an empty string and `cast` to an empty array, and the
    /// remaining optional fields filled in as nulls.
    pub fn into_document(self, id: Uuid, created_at: DateTime<Utc>) -> Value {
        let mut doc = self.body;
        let stamp = utc_timestamp(created_at);

        doc.insert("id".to_string(), json!(id.to_string()));
        doc.entry("description").or_insert_with(|| json!(""));
        doc.entry("cast").or_insert_with(|| json!([]));
        for field in NULLABLE_FIELDS {
            doc.entry(*field).or_insert(Value::Null);
        }
        doc.insert("created_at".to_string(), json!(stamp));
        doc.insert("updated_at".to_string(), json!(stamp));

        Value::Object(doc)
    }
}
