//! Data loading for template rendering.
//!
//! The data file is an optional JSON object whose keys become template
//! variables. Loading always re-reads from disk so edits show up on the next
//! request, and it never fails the render: missing or malformed data degrades
//! to an empty object.

use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

/// The untyped key/value object handed to the renderer.
pub type DataMap = Map<String, Value>;

/// Load the data object for a render.
///
/// - No path configured, or the file is missing: empty object, no error.
/// - File exists but is unreadable or not a JSON object: logged warning,
///   empty object. A broken data file must degrade the render (template sees
///   no data), not block the response.
pub async fn load_data(path: Option<&Path>) -> DataMap {
    let Some(path) = path else {
        return DataMap::new();
    };

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return DataMap::new(),
        Err(err) => {
            warn!("failed to read data file {}: {}", path.display(), err);
            return DataMap::new();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            warn!(
                "data file {} is not a JSON object, rendering without data",
                path.display()
            );
            DataMap::new()
        }
        Err(err) => {
            warn!(
                "failed to parse data file {}: {}, rendering without data",
                path.display(),
                err
            );
            DataMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_no_path_yields_empty_object() {
        let data = load_data(None).await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_data(Some(&dir.path().join("data.json"))).await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_valid_object_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(br#"{"title": "Hi", "count": 3}"#)
            .unwrap();

        let data = load_data(Some(&path)).await;
        assert_eq!(data.get("title"), Some(&Value::String("Hi".to_string())));
        assert_eq!(data.get("count"), Some(&Value::from(3)));
    }

    #[tokio::test]
    async fn test_malformed_json_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(br#"{"title": "#)
            .unwrap();

        let data = load_data(Some(&path)).await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_non_object_top_level_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(br#"["not", "an", "object"]"#)
            .unwrap();

        let data = load_data(Some(&path)).await;
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_reload_reflects_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, br#"{"title": "A"}"#).unwrap();
        let first = load_data(Some(&path)).await;
        assert_eq!(first.get("title"), Some(&Value::String("A".to_string())));

        std::fs::write(&path, br#"{"title": "B"}"#).unwrap();
        let second = load_data(Some(&path)).await;
        assert_eq!(second.get("title"), Some(&Value::String("B".to_string())));
    }
}
