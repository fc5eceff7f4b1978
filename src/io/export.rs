//! JSON document read and write helpers.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{NetworkError, Result};

/// Writes a value as pretty-printed JSON, creating parent directories as
/// needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    debug!(path = %path.display(), "wrote JSON document");
    Ok(())
}

/// Reads a JSON document into an untyped value.
pub fn load_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(NetworkError::MissingInput(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("doc.json");
        write_json(&path, &json!({ "ghe_id": "abc", "length": 100.0 }))
            .expect("write should succeed");
        let doc = load_json(&path).expect("read should succeed");
        assert_eq!(doc["ghe_id"], "abc");
        assert_eq!(doc["length"], 100.0);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = load_json(Path::new("/nonexistent/doc.json")).expect_err("should error");
        assert!(matches!(err, NetworkError::MissingInput(_)));
    }
}
