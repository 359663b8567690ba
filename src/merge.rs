//! Export and import passes over the translation directory.
//!
//! Export renders every task into
//! `<sourceRoot-parent>/translation/<locale>/<common-root-as-path>/` with
//! file names shortened by the shared common root. Import scans that same
//! directory, drops keys still carrying the `TRANSLATE_ME` sentinel and
//! writes the surviving pairs back into the source tree at the package
//! location rebuilt from the common root and the file name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::NO_TRANSLATION;
use crate::common_root::{common_root, dotted_to_path};
use crate::config::Config;
use crate::error::{PropsError, Result};
use crate::format::render_task;
use crate::model::TranslationKind;
use crate::properties;
use crate::task::TranslationTask;

/// Aggregate counts reported after an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStats {
    /// Simple-constant entries written
    pub constants: usize,
    /// Message entries written
    pub messages: usize,
    /// Alternate-form variants across all message entries
    pub variations: usize,
    /// Directory the files were written to
    pub directory: PathBuf,
}

/// Result of an import run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The export directory does not exist; nothing was read or written
    MissingDirectory(PathBuf),
    /// Translations were merged back into the source tree
    Imported { files: usize },
}

/// Common root used for directories and file-name shortening.
///
/// When the computed root equals a task's full path (a one-task run) the
/// final segment is the class name, not a package, so it is dropped to
/// keep the derived directory meaningful.
fn effective_root(tasks: &[TranslationTask]) -> String {
    let paths: Vec<String> = tasks.iter().map(|t| t.source_path.clone()).collect();
    let mut root = common_root(&paths);
    if !root.is_empty() && paths.iter().any(|p| *p == root) {
        root = match root.rfind('.') {
            Some(at) => root[..at].to_string(),
            None => String::new(),
        };
    }
    root
}

/// `<parent-of-first-source-root>/translation/<locale>/<common-root-as-path>`
fn translation_dir(config: &Config, root: &str) -> Result<PathBuf> {
    let first = config
        .source_roots
        .first()
        .ok_or(PropsError::EmptySourcePath)?;
    let parent = match first.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut dir = parent.join("translation").join(&config.locale);
    if !root.is_empty() {
        dir.push(dotted_to_path(root));
    }
    Ok(dir)
}

/// Qualified name with the common root (and its separator) stripped
fn shorten<'a>(qualified_name: &'a str, root: &str) -> &'a str {
    if root.is_empty() {
        return qualified_name;
    }
    match qualified_name
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        Some(rest) if !rest.is_empty() => rest,
        _ => qualified_name,
    }
}

/// Serialize every task to its translation file and report counts
pub fn export(tasks: &[TranslationTask], config: &Config) -> Result<ExportStats> {
    let root = effective_root(tasks);
    let directory = translation_dir(config, &root)?;
    fs::create_dir_all(&directory)?;

    let mut stats = ExportStats {
        constants: 0,
        messages: 0,
        variations: 0,
        directory,
    };
    for task in tasks {
        let contents = render_task(task);
        let file_name = format!(
            "{}_{}.properties",
            shorten(&task.source_path, &root),
            task.locale
        );
        fs::write(stats.directory.join(file_name), contents)?;
        if task.kind == TranslationKind::Constants {
            stats.constants += task.size();
        } else {
            stats.messages += task.size();
            stats.variations += task.variations();
        }
    }
    Ok(stats)
}

/// Read edited translation files back, strip untranslated placeholders and
/// write the survivors into the source tree. A missing export directory is
/// a clean no-op.
pub fn import(tasks: &[TranslationTask], config: &Config) -> Result<ImportOutcome> {
    let root = effective_root(tasks);
    let directory = translation_dir(config, &root)?;
    if !directory.is_dir() {
        return Ok(ImportOutcome::MissingDirectory(directory));
    }
    let source_root = config
        .source_roots
        .first()
        .ok_or(PropsError::EmptySourcePath)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(&directory)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut files = 0;
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            eprintln!("Warning: Skipping non-UTF-8 file name in {}", directory.display());
            continue;
        };
        // Trailing two components are `<base>_<locale>` and `properties`;
        // anything before them is package path relative to the common root
        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() < 2 {
            eprintln!("Warning: Skipping unrecognized file name '{}'", name);
            continue;
        }
        let base = parts[parts.len() - 2];

        let mut target_dir = source_root.join(dotted_to_path(&root));
        for segment in &parts[..parts.len() - 2] {
            target_dir.push(segment);
        }

        let content = fs::read_to_string(&path)?;
        let mut table = properties::parse(&content, &path)?;
        table.retain(|_, value| value != NO_TRANSLATION);

        fs::create_dir_all(&target_dir)?;
        let target = target_dir.join(format!("{}.properties", base));
        fs::write(target, properties::store(&table))?;
        files += 1;
    }
    Ok(ImportOutcome::Imported { files })
}
