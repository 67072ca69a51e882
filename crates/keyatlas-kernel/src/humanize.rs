//! Symbolic-name humanization.

/// Prefixes stripped before title-casing. At most one is removed.
const STRIPPED_PREFIXES: [&str; 2] = ["KC_", "QK_"];

/// Derive a human-readable label from a symbolic keycode name.
///
/// Strips one recognized prefix if present, splits the remainder on
/// underscores, title-cases each segment, and joins with single spaces.
/// Total: every input yields a label.
pub fn humanize(name: &str) -> String {
    let stripped = STRIPPED_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name);

    stripped
        .split('_')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
