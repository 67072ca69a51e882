//! Descriptor records: the curated registry input and the emitted unit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Long/short name pair carried by every descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeycodeName {
    pub long: String,
    pub short: String,
}

/// A record from the pre-existing curated registry.
///
/// Lenient by design: early registry snapshots omit descriptions and
/// labels, and keywords may be missing entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedDescriptor {
    pub code: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub name: KeycodeName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii: Option<String>,
}

/// One emitted registry record.
///
/// Declaration order here is the artifact field order. `ascii` is omitted
/// from JSON when absent — it is copied from curated data, never
/// synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeycodeDescriptor {
    pub description: String,
    pub code: u32,
    pub label: String,
    pub name: KeycodeName,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii: Option<String>,
}

/// Code-indexed lookup over curated descriptors.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    records: BTreeMap<u32, CuratedDescriptor>,
}

impl RegistryIndex {
    /// Index curated records by code.
    ///
    /// Duplicate codes resolve with deterministic last-write-wins semantics,
    /// matching artifact regeneration behavior.
    pub fn from_records(records: Vec<CuratedDescriptor>) -> Self {
        let mut index = BTreeMap::new();
        for record in records {
            index.insert(record.code, record);
        }
        Self { records: index }
    }

    /// Lookup one curated record by numeric code.
    pub fn lookup(&self, code: u32) -> Option<&CuratedDescriptor> {
        self.records.get(&code)
    }

    /// Total number of curated records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds zero records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
