//! Entity catalog loading.
//!
//! A catalog is a JSON file describing candidate notebooks/knowledge bases.
//! Two shapes are accepted: a top-level `{"notebooks": ...}` wrapper whose
//! value is either a map keyed by id or a list, or a bare list of entities.
//! Map catalogs keep their file order (serde_json's `preserve_order`
//! feature), which the scorer's stable tie-break depends on.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LacunaError, Result};

/// A catalog item scored against requirement keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchableEntity {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Topic tags.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Link to the entity, when the catalog carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Load a catalog from disk.
///
/// Load failures are surfaced as [`LacunaError::Catalog`]; callers report
/// the error and produce an empty selection, never invoking the matcher.
pub fn load_catalog(path: &Path) -> Result<Vec<MatchableEntity>> {
    let raw = fs::read_to_string(path).map_err(|e| LacunaError::Catalog {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| LacunaError::Catalog {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let entities = match &value {
        Value::Object(map) => match map.get("notebooks") {
            Some(inner) => parse_entities(inner),
            None => None,
        },
        Value::Array(_) => parse_entities(&value),
        _ => None,
    };

    entities.ok_or_else(|| LacunaError::Catalog {
        path: path.to_path_buf(),
        message: "expected a list of entities or a map keyed by id".into(),
    })
}

/// Parse either a map keyed by id (file order preserved) or a list.
fn parse_entities(value: &Value) -> Option<Vec<MatchableEntity>> {
    match value {
        Value::Object(map) => {
            let mut entities = Vec::with_capacity(map.len());
            for entry in map.values() {
                entities.push(serde_json::from_value(entry.clone()).ok()?);
            }
            Some(entities)
        }
        Value::Array(items) => {
            let mut entities = Vec::with_capacity(items.len());
            for entry in items {
                entities.push(serde_json::from_value(entry.clone()).ok()?);
            }
            Some(entities)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_map_shaped_catalog_in_file_order() {
        let file = write_catalog(
            r#"{"notebooks": {
                "zzz": {"id": "zzz", "name": "Last Alphabetically"},
                "aaa": {"id": "aaa", "name": "First Alphabetically"}
            }}"#,
        );
        let entities = load_catalog(file.path()).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].id, "zzz");
        assert_eq!(entities[1].id, "aaa");
    }

    #[test]
    fn loads_list_shaped_catalog() {
        let file = write_catalog(
            r#"{"notebooks": [
                {"id": "nb1", "name": "Security", "topics": ["iso", "soc"]},
                {"id": "nb2", "name": "Privacy", "description": "GDPR notes"}
            ]}"#,
        );
        let entities = load_catalog(file.path()).unwrap();
        assert_eq!(entities[0].topics, vec!["iso", "soc"]);
        assert_eq!(entities[1].description, "GDPR notes");
    }

    #[test]
    fn loads_bare_list_catalog() {
        let file = write_catalog(r#"[{"id": "nb1", "name": "Security"}]"#);
        let entities = load_catalog(file.path()).unwrap();
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn optional_fields_default() {
        let file = write_catalog(r#"[{"id": "nb1", "name": "Security"}]"#);
        let entities = load_catalog(file.path()).unwrap();
        assert!(entities[0].description.is_empty());
        assert!(entities[0].topics.is_empty());
        assert!(entities[0].url.is_none());
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let err = load_catalog(Path::new("/nonexistent/library.json")).unwrap_err();
        assert!(matches!(err, LacunaError::Catalog { .. }));
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let file = write_catalog("not json at all");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, LacunaError::Catalog { .. }));
    }

    #[test]
    fn wrong_shape_is_a_catalog_error() {
        let file = write_catalog(r#"{"something_else": 42}"#);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, LacunaError::Catalog { .. }));
    }
}
