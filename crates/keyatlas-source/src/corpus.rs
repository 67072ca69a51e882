//! Definition-file ingestion: filename pattern, JSON body, corpus grouping.

use crate::error::SourceError;
use keyatlas_kernel::model::{DEFAULT_CATEGORY, SourceCorpus, VersionLayer};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// One `{ "define": … }` range entry. Ranges reserve code blocks upstream
/// and carry no per-key data; the pipeline parses them and nothing more.
#[derive(Debug, Clone, Deserialize)]
pub struct RangeDefinition {
    pub define: String,
}

/// Parsed body of one definition file. A file with no `keycodes` section
/// contributes nothing to the corpus.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionFile {
    #[serde(default)]
    pub ranges: BTreeMap<String, RangeDefinition>,
    #[serde(default)]
    pub keycodes: Option<VersionLayer>,
}

/// Version and category parsed from one definition filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStamp {
    pub version: String,
    pub category: String,
}

fn file_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^keycodes_(\d+\.\d+\.\d+)(?:_([a-z]+))?\.json$")
            .expect("definition filename regex must compile")
    })
}

/// Split a definition filename into its version/category stamp.
///
/// A filename that carries the `keycodes` prefix but fails the full pattern
/// is an error: layering it under an undefined version would silently
/// corrupt the merge order.
pub fn parse_file_name(file_name: &str) -> Result<FileStamp, SourceError> {
    let captures = file_name_re()
        .captures(file_name)
        .ok_or_else(|| SourceError::PatternMismatch {
            file_name: file_name.to_string(),
        })?;
    Ok(FileStamp {
        version: captures[1].to_string(),
        category: captures
            .get(2)
            .map_or(DEFAULT_CATEGORY, |m| m.as_str())
            .to_string(),
    })
}

/// Load every definition file under `dir` into the layered corpus.
///
/// Only `.json` entries carrying the `keycodes` prefix are considered;
/// everything else in the directory is ignored.
pub fn load_corpus(dir: impl AsRef<Path>) -> Result<SourceCorpus, SourceError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| SourceError::Configuration {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut corpus = SourceCorpus::new();
    for entry in entries {
        let entry = entry.map_err(|e| SourceError::Configuration {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !is_definition_candidate(&path, file_name) {
            continue;
        }

        let stamp = parse_file_name(file_name)?;
        let file = read_definition_file(&path)?;
        let Some(keycodes) = file.keycodes else {
            continue;
        };
        corpus
            .entry(stamp.category)
            .or_default()
            .insert(stamp.version, keycodes);
    }
    Ok(corpus)
}

fn is_definition_candidate(path: &Path, file_name: &str) -> bool {
    path.extension().is_some_and(|ext| ext == "json") && file_name.starts_with("keycodes")
}

fn read_definition_file(path: &Path) -> Result<DefinitionFile, SourceError> {
    let bytes = fs::read(path).map_err(|e| SourceError::Configuration {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
