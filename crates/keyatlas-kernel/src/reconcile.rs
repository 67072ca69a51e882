//! Registry reconciliation: merged source data, curated data, and
//! description overrides folded into final descriptor records.

use crate::descriptor::{CuratedDescriptor, KeycodeDescriptor, KeycodeName, RegistryIndex};
use crate::error::ReconcileError;
use crate::humanize::humanize;
use crate::model::{KeycodeDefinition, MergedTable, OverrideTable};

/// A symbolic-name disagreement between merged source data and the curated
/// registry entry for the same code. Reported, never fatal, and never
/// reflected in the emitted record — the source name wins unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMismatch {
    pub code: u32,
    pub curated: String,
    pub incoming: String,
}

impl std::fmt::Display for NameMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "code 0x{:04X}: curated registry names `{}`, source names `{}`",
            self.code, self.curated, self.incoming
        )
    }
}

/// Result of one reconciliation pass: the ordered artifact records plus any
/// non-fatal findings.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    pub descriptors: Vec<KeycodeDescriptor>,
    pub diagnostics: Vec<NameMismatch>,
}

/// Reconcile the merged table against curated data and description
/// overrides.
///
/// Descriptors come out in ascending numeric code order. The override table
/// and curated registry are read-only collaborators; a hex key that fails
/// to parse aborts the pass.
pub fn reconcile(
    table: &MergedTable,
    overrides: &OverrideTable,
    registry: &RegistryIndex,
) -> Result<Reconciliation, ReconcileError> {
    let mut rows: Vec<(u32, &KeycodeDefinition)> = Vec::with_capacity(table.len());
    for (code, def) in table {
        rows.push((parse_code(code, &def.key)?, def));
    }
    rows.sort_by_key(|(code, _)| *code);

    let mut out = Reconciliation::default();
    for (code, def) in rows {
        let existing = registry.lookup(code);
        if let Some(curated) = existing
            && curated.name.long != def.key
        {
            out.diagnostics.push(NameMismatch {
                code,
                curated: curated.name.long.clone(),
                incoming: def.key.clone(),
            });
        }
        out.descriptors
            .push(build_descriptor(code, def, overrides, existing));
    }
    Ok(out)
}

fn parse_code(code: &str, key: &str) -> Result<u32, ReconcileError> {
    let digits = code
        .strip_prefix("0x")
        .or_else(|| code.strip_prefix("0X"))
        .unwrap_or(code);
    u32::from_str_radix(digits, 16).map_err(|source| ReconcileError::InvalidCode {
        code: code.to_string(),
        key: key.to_string(),
        source,
    })
}

fn build_descriptor(
    code: u32,
    def: &KeycodeDefinition,
    overrides: &OverrideTable,
    existing: Option<&CuratedDescriptor>,
) -> KeycodeDescriptor {
    let label = existing
        .and_then(|curated| non_empty(curated.label.as_deref()))
        .or_else(|| non_empty(def.label.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| humanize(&def.key));

    let description = non_empty(overrides.get(&def.key).map(String::as_str))
        .or_else(|| existing.and_then(|curated| non_empty(curated.description.as_deref())))
        .map(str::to_string)
        .unwrap_or_else(|| label.clone());

    let short = non_empty(def.aliases.first().map(String::as_str))
        .unwrap_or(def.key.as_str())
        .to_string();

    let keywords = match existing {
        Some(curated) => curated.keywords.clone(),
        None => vec![label.clone()],
    };

    KeycodeDescriptor {
        description,
        code,
        label,
        name: KeycodeName {
            long: def.key.clone(),
            short,
        },
        keywords,
        ascii: existing.and_then(|curated| curated.ascii.clone()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
