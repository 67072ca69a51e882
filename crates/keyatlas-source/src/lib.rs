//! # keyatlas-source
//!
//! Filesystem boundary for the registry build.
//!
//! This crate provides:
//! - definition-file ingestion (filename pattern, JSON body, corpus grouping)
//! - the tab-separated description override table
//! - curated registry loading (the prior artifact, indexed by code)
//! - atomic artifact emission
//!
//! The kernel stays pure; everything that touches disk lives here.
//!
//! ## Data flow
//!
//! ```text
//! keycodes_<version>[_<category>].json  (on disk, one layer per file)
//!     ↓  load_corpus
//! SourceCorpus → kernel → Vec<KeycodeDescriptor>
//!     ↓  write_artifact
//! one pretty-printed JSON array, replaced atomically
//! ```

pub mod artifact;
pub mod corpus;
pub mod error;
pub mod overrides;
pub mod registry;

pub use artifact::{render_artifact, write_artifact};
pub use corpus::{DefinitionFile, FileStamp, RangeDefinition, load_corpus, parse_file_name};
pub use error::SourceError;
pub use overrides::{load_overrides, parse_overrides};
pub use registry::load_registry;
