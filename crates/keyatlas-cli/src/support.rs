//! Shared CLI helpers: load-or-exit wrappers around the source boundary.

use keyatlas_kernel::descriptor::{KeycodeDescriptor, RegistryIndex};
use keyatlas_kernel::model::{OverrideTable, SourceCorpus};
use keyatlas_source::{load_corpus, load_overrides, load_registry, write_artifact};

pub fn load_corpus_or_exit(dir: &str) -> SourceCorpus {
    load_corpus(dir).unwrap_or_else(|e| fail(e))
}

pub fn load_overrides_or_exit(path: &str) -> OverrideTable {
    load_overrides(path).unwrap_or_else(|e| fail(e))
}

pub fn load_registry_or_exit(path: &str) -> RegistryIndex {
    load_registry(path).unwrap_or_else(|e| fail(e))
}

pub fn write_artifact_or_exit(path: &str, descriptors: &[KeycodeDescriptor]) {
    write_artifact(path, descriptors).unwrap_or_else(|e| fail(e))
}

pub fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
