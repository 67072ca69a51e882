//! # keyatlas-kernel
//!
//! Core semantics for the canonical keycode registry: version/category
//! layering and curated-registry reconciliation.
//!
//! This crate is pure. The `keyatlas-source` crate feeds it plain in-memory
//! structures and writes what it returns; process concerns live in
//! `keyatlas-cli`.
//!
//! ## Pipeline position
//!
//! ```text
//! SourceCorpus            ← loader output: category → version → layer
//!     │  merge
//! MergedTable             ← one winning definition per hex code
//!     │  reconcile        ← + OverrideTable, RegistryIndex (read-only)
//! Reconciliation          ← ordered descriptor list + diagnostics
//! ```

pub mod descriptor;
pub mod error;
pub mod humanize;
pub mod merge;
pub mod model;
pub mod reconcile;

pub use descriptor::{CuratedDescriptor, KeycodeDescriptor, KeycodeName, RegistryIndex};
pub use error::ReconcileError;
pub use humanize::humanize;
pub use merge::merge;
pub use model::{
    DEFAULT_CATEGORY, KeycodeDefinition, MergedTable, OverrideTable, RESET_KEY, SourceCorpus,
    VersionLayer,
};
pub use reconcile::{NameMismatch, Reconciliation, reconcile};
