//! The one pipeline run: load, merge, reconcile, write, report.

use crate::cli::Cli;
use crate::support::{
    fail, load_corpus_or_exit, load_overrides_or_exit, load_registry_or_exit,
    write_artifact_or_exit,
};
use keyatlas_kernel::{merge, reconcile};
use serde_json::json;

pub fn run(cli: Cli) {
    let corpus = load_corpus_or_exit(&cli.keycodes);
    let overrides = load_overrides_or_exit(&cli.overrides);
    let registry = load_registry_or_exit(&cli.registry);

    let table = merge(&corpus);
    let outcome = reconcile(&table, &overrides, &registry).unwrap_or_else(|e| fail(e));
    write_artifact_or_exit(&cli.out, &outcome.descriptors);

    if cli.json {
        let payload = json!({
            "keycodesDir": cli.keycodes,
            "categoryCount": corpus.len(),
            "mergedCodeCount": table.len(),
            "descriptorCount": outcome.descriptors.len(),
            "curatedCount": registry.len(),
            "overrideCount": overrides.len(),
            "artifactPath": cli.out,
            "diagnostics": outcome
                .diagnostics
                .iter()
                .map(|d| {
                    json!({
                        "code": d.code,
                        "curated": d.curated,
                        "incoming": d.incoming,
                    })
                })
                .collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("keyatlas registry build");
        println!("  Definitions: {} categories from {}", corpus.len(), cli.keycodes);
        println!("  Merged codes: {}", table.len());
        println!("  Descriptors: {}", outcome.descriptors.len());
        println!("  Artifact: {}", cli.out);
        for diagnostic in &outcome.diagnostics {
            eprintln!("warning: name mismatch: {diagnostic}");
        }
    }
}
