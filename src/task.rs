//! Translation tasks: one class's worth of translatable entries for one
//! locale, with existing translations pulled in from the source tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::common_root::dotted_to_path;
use crate::entry::TranslatableEntry;
use crate::error::{PropsError, Result};
use crate::model::{ClassModel, TranslationKind};
use crate::properties;

/// One translatable class bound to a target locale
#[derive(Debug, Clone)]
pub struct TranslationTask {
    /// Fully-qualified dotted name of the class
    pub source_path: String,
    /// Target locale code
    pub locale: String,
    pub kind: TranslationKind,
    /// Entries in method declaration order
    pub entries: Vec<TranslatableEntry>,
}

impl TranslationTask {
    /// Build a task for one class, loading any existing translations for
    /// the locale from the source roots first.
    pub fn build(
        class: &ClassModel,
        kind: TranslationKind,
        locale: &str,
        source_roots: &[PathBuf],
    ) -> Result<Self> {
        let existing = read_existing(&class.qualified_name, locale, source_roots)?;

        let prefix = format!("{}.", class.qualified_name);
        let entries = class
            .methods
            .iter()
            .map(|method| {
                let key = method
                    .qualified_name
                    .strip_prefix(&prefix)
                    .unwrap_or(&method.qualified_name);
                TranslatableEntry::build(method, kind, &existing, key)
            })
            .collect();

        Ok(TranslationTask {
            source_path: class.qualified_name.clone(),
            locale: locale.to_string(),
            kind,
            entries,
        })
    }

    /// Number of entries in the task
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Total alternate-form variants across all entries
    pub fn variations(&self) -> usize {
        self.entries.iter().map(TranslatableEntry::variations).sum()
    }
}

/// Location of an existing translation file for a class under one root
fn existing_file(root: &Path, qualified_name: &str, locale: &str) -> PathBuf {
    let mut path = root.join(dotted_to_path(qualified_name));
    let stem = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
    path.set_file_name(format!("{}_{}.properties", stem, locale));
    path
}

/// Load existing translations for a class, checking each source root in
/// order. Every root that has a file contributes to the same table, so a
/// later root's value wins on key collision. A file that exists but cannot
/// be read is fatal.
fn read_existing(
    qualified_name: &str,
    locale: &str,
    source_roots: &[PathBuf],
) -> Result<HashMap<String, String>> {
    let mut table = HashMap::new();
    for root in source_roots {
        let path = existing_file(root, qualified_name, locale);
        if !path.is_file() {
            continue;
        }
        let content = std::fs::read_to_string(&path).map_err(|e| PropsError::ExistingRead {
            path: path.clone(),
            source: e,
        })?;
        table.extend(properties::parse(&content, &path)?);
    }
    Ok(table)
}

/// Build one task per recognized interface on each class, sorted by
/// (kind, qualified name) ascending. Classes declaring no recognized
/// interface produce nothing.
pub fn build_tasks(
    classes: &[ClassModel],
    locale: &str,
    source_roots: &[PathBuf],
) -> Result<Vec<TranslationTask>> {
    let mut tasks = Vec::new();
    for class in classes {
        for interface in &class.interfaces {
            let kind = TranslationKind::for_interface(interface);
            if kind == TranslationKind::NotApplicable {
                continue;
            }
            tasks.push(TranslationTask::build(class, kind, locale, source_roots)?);
        }
    }
    tasks.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.source_path.cmp(&b.source_path))
    });
    Ok(tasks)
}
