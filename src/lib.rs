//! Extracts localizable string tables from documented interface metadata
//! into human-editable, locale-specific properties files, and merges edited
//! translations back into the original source tree.
//!
//! The pipeline runs in one direction per invocation:
//!
//! 1. **export** — the documentation-model snapshot is turned into one
//!    [`TranslationTask`] per translatable class, existing translations are
//!    layered in from the source roots, and each task is rendered as a
//!    richly commented `key = value` file under
//!    `<sourceRoot-parent>/translation/<locale>/`.
//! 2. **import** — the edited files are parsed back, every key still
//!    carrying the [`NO_TRANSLATION`] sentinel is dropped, and the
//!    surviving pairs are written to the class's package location under
//!    the source root.

pub mod common_root;
pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod merge;
pub mod model;
pub mod properties;
pub mod task;

pub use common_root::common_root;
pub use config::{Config, Mode};
pub use entry::TranslatableEntry;
pub use error::{PropsError, Result};
pub use merge::{ExportStats, ImportOutcome};
pub use model::{Annotation, ClassModel, MethodModel, ParamModel, TranslationKind, load_model};
pub use task::{TranslationTask, build_tasks};

/// Placeholder value marking a property not yet translated. Never a
/// legitimate translation: import drops every key still carrying it.
pub const NO_TRANSLATION: &str = "TRANSLATE_ME";

#[cfg(test)]
mod integration_tests;
