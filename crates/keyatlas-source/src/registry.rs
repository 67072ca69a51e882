//! Curated registry input: the prior artifact, indexed by numeric code.

use crate::error::SourceError;
use keyatlas_kernel::descriptor::{CuratedDescriptor, RegistryIndex};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load the curated registry from the prior artifact.
///
/// A missing file yields an empty index — the bootstrap run has no prior
/// registry to reconcile against. Any other read failure, and malformed
/// JSON, stay fatal.
pub fn load_registry(path: impl AsRef<Path>) -> Result<RegistryIndex, SourceError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RegistryIndex::default()),
        Err(e) => {
            return Err(SourceError::Configuration {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };

    let records: Vec<CuratedDescriptor> =
        serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(RegistryIndex::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "keyatlas-registry-{prefix}-{}-{unique}.json",
            std::process::id()
        ))
    }

    #[test]
    fn prior_artifact_loads_into_the_index() {
        let path = temp_path("load");
        fs::write(
            &path,
            r#"[
  {
    "description": "Letter A",
    "code": 4,
    "label": "A",
    "name": {"long": "KC_A", "short": "KC_A"},
    "keywords": ["a"],
    "ascii": "a"
  }
]"#,
        )
        .expect("fixture should write");

        let index = load_registry(&path).expect("registry should load");
        assert_eq!(index.len(), 1);
        let record = index.lookup(4).expect("code 4 should be indexed");
        assert_eq!(record.description.as_deref(), Some("Letter A"));
        assert_eq!(record.ascii.as_deref(), Some("a"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_means_bootstrap_run() {
        let index = load_registry(temp_path("missing")).expect("missing registry should be empty");
        assert!(index.is_empty());
    }

    #[test]
    fn malformed_registry_is_a_parse_error() {
        let path = temp_path("malformed");
        fs::write(&path, "{not a registry").expect("fixture should write");

        match load_registry(&path) {
            Err(SourceError::Parse { .. }) => {}
            other => panic!("expected parse error, got {other:?}"),
        }

        let _ = fs::remove_file(path);
    }
}
