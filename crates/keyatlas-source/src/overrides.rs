//! Description override table: `symbolic name<TAB>description` rows.

use crate::error::SourceError;
use keyatlas_kernel::model::OverrideTable;
use std::fs;
use std::path::Path;

/// Parse override rows from raw table text.
///
/// One record per line, no header. Blank lines are skipped; descriptions
/// keep any further whitespace verbatim. Duplicate names resolve
/// last-writer-wins.
pub fn parse_overrides(text: &str, origin: &Path) -> Result<OverrideTable, SourceError> {
    let mut table = OverrideTable::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((name, description)) = line.split_once('\t') else {
            return Err(SourceError::Parse {
                path: origin.to_path_buf(),
                message: format!("line {}: expected `name<TAB>description`", line_no + 1),
            });
        };
        table.insert(name.to_string(), description.to_string());
    }
    Ok(table)
}

/// Load the override table from disk. The table is a required input.
pub fn load_overrides(path: impl AsRef<Path>) -> Result<OverrideTable, SourceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SourceError::Configuration {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_overrides(&text, path)
}
