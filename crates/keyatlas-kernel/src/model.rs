//! Source-side data model: definitions, layers, and the merged table.
//!
//! Everything is keyed through ordered maps so that iteration order *is*
//! the layering order: categories ascend lexicographically, and within a
//! category so do version strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel `keycodes` key that discards everything a category has
/// accumulated before the rest of the carrying layer applies. Never a
/// keycode itself.
pub const RESET_KEY: &str = "!reset!";

/// Reserved category marker for definition files with no category token.
///
/// `_` sorts ahead of every lowercase named category byte-wise, so the
/// unnamed base set applies first and named categories layer over it.
pub const DEFAULT_CATEGORY: &str = "_";

/// One keycode definition as published by the firmware project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeycodeDefinition {
    /// Symbolic name, e.g. `"KC_A"`. Empty only on the reset sentinel entry.
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Alternative symbolic names; the first one doubles as the short name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl KeycodeDefinition {
    /// Definition carrying just a symbolic name, the most common shape
    /// upstream.
    pub fn named(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            group: None,
            aliases: Vec::new(),
            label: None,
        }
    }
}

/// One version's keycode map for one category, keyed by hex code string.
pub type VersionLayer = BTreeMap<String, KeycodeDefinition>;

/// `category → version → layer`, both keys strings.
pub type SourceCorpus = BTreeMap<String, BTreeMap<String, VersionLayer>>;

/// Flat `hex code → winning definition` table produced by layering.
pub type MergedTable = BTreeMap<String, KeycodeDefinition>;

/// Authoritative description overrides keyed by symbolic name.
pub type OverrideTable = BTreeMap<String, String>;
