//! Core types for Prompt Gallery

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a prompt record.
///
/// The collection uses integer ids, but string ids are accepted as-is. Any
/// other JSON value (float, bool, null, ...) is kept as its JSON text so a
/// single odd id never fails the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
    Raw(#[serde(deserialize_with = "json_text")] String),
}

fn json_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(serde_json::Value::deserialize(deserializer)?.to_string())
}

/// `null` decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) | RecordId::Raw(id) => write!(f, "{}", id),
        }
    }
}

/// One prompt entry of the gallery.
///
/// Records are immutable once loaded. Only `id` is required; missing or
/// `null` text fields decode as empty and flow straight into the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

impl PromptRecord {
    /// Create a record (mostly useful for tests and the importer)
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        prompt: impl Into<String>,
        categories: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prompt: prompt.into(),
            image: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Set the image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Sidebar entry of the wiki viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Nesting depth, used for indentation
    #[serde(default)]
    pub level: u8,
    pub text: String,
    pub url: String,
}

impl NavEntry {
    pub fn new(level: u8, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_int_and_string() {
        let int: RecordId = serde_json::from_str("7").unwrap();
        let text: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(int, RecordId::Int(7));
        assert_eq!(text, RecordId::Text("abc".to_string()));
        assert_eq!(int.to_string(), "7");
        assert_eq!(text.to_string(), "abc");
    }

    #[test]
    fn test_record_missing_optional_fields() {
        let record: PromptRecord =
            serde_json::from_str(r#"{"id": 3, "title": "T", "prompt": "P"}"#).unwrap();
        assert!(record.image.is_empty());
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_odd_ids_are_kept_as_json_text() {
        let float: RecordId = serde_json::from_str("1.5").unwrap();
        let null: RecordId = serde_json::from_str("null").unwrap();
        assert_eq!(float, RecordId::Raw("1.5".to_string()));
        assert_eq!(float.to_string(), "1.5");
        assert_eq!(null.to_string(), "null");
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let record: PromptRecord = serde_json::from_str(
            r#"{"id": 2.5, "title": null, "prompt": "P", "image": null, "categories": null}"#,
        )
        .unwrap();
        assert_eq!(record.id, RecordId::Raw("2.5".to_string()));
        assert!(record.title.is_empty());
        assert_eq!(record.prompt, "P");
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_nav_entry_default_level() {
        let entry: NavEntry =
            serde_json::from_str(r#"{"text": "Home", "url": "https://example.com/"}"#).unwrap();
        assert_eq!(entry.level, 0);
    }
}
