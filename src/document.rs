//! Loading and wrapping the local configuration document.
//!
//! The file is parsed in full before any write request is issued. No
//! schema is enforced; any JSON value tree is accepted.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{SyncError, SyncResult};

/// Request body for the write: the parsed document under a fixed key.
#[derive(Debug, Serialize)]
pub struct ConfigPayload {
    config: Value,
}

impl ConfigPayload {
    /// Wrap a parsed document without altering its internal shape.
    pub fn new(document: Value) -> Self {
        Self { config: document }
    }
}

/// Read and parse the configuration file into a generic JSON value.
pub fn load(path: &Path) -> SyncResult<Value> {
    let raw = fs::read(path).map_err(|source| SyncError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&raw).map_err(|source| SyncError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn loads_arbitrary_json_document() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"driver": "sql", "options": [1, 2.5, null, true]}}"#).expect("write");

        let document = load(file.path()).expect("load");
        assert_eq!(
            document,
            json!({"driver": "sql", "options": [1, 2.5, null, true]})
        );
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let err = load(Path::new("/nonexistent/cfg.json")).expect_err("missing file");
        assert!(matches!(err, SyncError::FileAccess { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "driver = sql").expect("write");

        let err = load(file.path()).expect_err("not JSON");
        assert!(matches!(err, SyncError::Parse { .. }));
    }

    #[test]
    fn payload_round_trips_the_document() {
        let document = json!({
            "driver": "sql",
            "nested": {"a": [1, "two", false, null]}
        });

        let payload = ConfigPayload::new(document.clone());
        let serialized = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(serialized, json!({"config": document.clone()}));
        assert_eq!(serialized["config"], document);
    }
}
