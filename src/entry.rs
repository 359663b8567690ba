//! One translatable entry, built from a single documented method.

use std::collections::HashMap;

use crate::NO_TRANSLATION;
use crate::model::{Annotation, MethodModel, TranslationKind};

/// One message or constant with its metadata and resolved values.
///
/// An entry owns its base property key plus one derived key per alternate
/// form (`base[literal]`). Each owned key resolves either to a previously
/// stored translation or to the `TRANSLATE_ME` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableEntry {
    /// Property key, the method name relative to its owning class
    pub key: String,
    /// Literal default text from the kind-appropriate annotation, or empty
    pub default_value: String,
    /// Documentation text with embedded line breaks removed; synthesized
    /// when no doc comment was supplied
    pub doc: String,
    /// Value of the Description annotation, if present
    pub description: Option<String>,
    /// Value of the Meaning annotation, if present
    pub meaning: Option<String>,
    /// Display strings for the method parameters, in order
    pub params: Vec<String>,
    /// Alternate forms as (bracketed literal, descriptive text) pairs,
    /// in annotation order
    pub forms: Vec<(String, String)>,
    /// Names of parameters flagged as plural-count or selector controls
    pub form_params: Vec<String>,
    /// Resolved (property key, value) pairs: base key first, then one
    /// derived key per alternate form
    pub values: Vec<(String, String)>,
}

impl TranslatableEntry {
    /// Build an entry from one method, resolving annotation metadata and
    /// any existing stored translations for the keys it owns.
    pub fn build(
        method: &MethodModel,
        kind: TranslationKind,
        existing: &HashMap<String, String>,
        key: &str,
    ) -> Self {
        let default_annotation = if kind == TranslationKind::Constants {
            Annotation::DefaultStringValue
        } else {
            Annotation::DefaultMessage
        };
        let default_value = default_annotation
            .value_in(method)
            .unwrap_or_default()
            .to_string();

        let doc = if method.comment.is_empty() {
            format!("Translation for '{}' (no doc comment supplied)", key)
        } else {
            method.comment.replace('\n', "")
        };

        let mut values = vec![(key.to_string(), resolve(existing, key))];
        let mut forms = Vec::new();
        let mut params = Vec::new();
        let mut form_params = Vec::new();

        if kind == TranslationKind::Messages {
            // Alternate forms arrive as a flat literal/text pair list
            if let Some(pairs) = Annotation::AlternateMessage.values_in(method) {
                for pair in pairs.chunks_exact(2) {
                    forms.push((format!("[{}]", pair[0]), pair[1].clone()));
                    let derived = format!("{}[{}]", key, pair[0]);
                    let value = resolve(existing, &derived);
                    values.push((derived, value));
                }
            }
            for param in &method.params {
                params.push(param.display.clone());
                if Annotation::PluralCount.exists_on(param) || Annotation::Select.exists_on(param) {
                    form_params.push(param.name.clone());
                }
            }
        }

        TranslatableEntry {
            key: key.to_string(),
            default_value,
            doc,
            description: Annotation::Description.value_in(method).map(str::to_string),
            meaning: Annotation::Meaning.value_in(method).map(str::to_string),
            params,
            forms,
            form_params,
            values,
        }
    }

    /// Number of alternate-form variants this entry carries
    pub fn variations(&self) -> usize {
        self.forms.len()
    }
}

fn resolve(existing: &HashMap<String, String>, key: &str) -> String {
    existing
        .get(key)
        .cloned()
        .unwrap_or_else(|| NO_TRANSLATION.to_string())
}
