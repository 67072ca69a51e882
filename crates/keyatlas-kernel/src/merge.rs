//! Version/category layering: fold ordered layers into one flat table.

use crate::model::{KeycodeDefinition, MergedTable, RESET_KEY, SourceCorpus, VersionLayer};
use std::collections::BTreeMap;

/// Layer every category's version sequence into one flat code table.
///
/// Categories apply in ascending lexicographic order onto one shared
/// accumulator, so a later category wins same-code collisions. Within a
/// category, versions apply ascending by string comparison — correct only
/// while every `MAJOR.MINOR.PATCH` component stays single-digit
/// (`"0.10.0"` sorts before `"0.9.0"`), which upstream data has held to.
pub fn merge(corpus: &SourceCorpus) -> MergedTable {
    let mut table = MergedTable::new();
    for versions in corpus.values() {
        table.extend(fold_category(versions.values()));
    }
    table
}

/// Fold one category's ordered layers, honoring reset directives.
///
/// The fold keeps a single working map per category: a layer carrying the
/// reset sentinel clears it before the layer's remaining keys apply, so a
/// layer is either fully merged or fully discarded by a later reset.
fn fold_category<'a>(
    layers: impl Iterator<Item = &'a VersionLayer>,
) -> BTreeMap<String, KeycodeDefinition> {
    layers.fold(BTreeMap::new(), apply_layer)
}

fn apply_layer(
    mut acc: BTreeMap<String, KeycodeDefinition>,
    layer: &VersionLayer,
) -> BTreeMap<String, KeycodeDefinition> {
    if layer.contains_key(RESET_KEY) {
        acc.clear();
    }
    for (code, def) in layer {
        if code == RESET_KEY {
            continue;
        }
        acc.insert(code.clone(), def.clone());
    }
    acc
}
