//! Read-only snapshot of the documentation model.
//!
//! The extractor never talks to a live documentation host. Instead the host
//! dumps the classes it saw into a JSON snapshot, and this module
//! deserializes that snapshot into plain data-transfer structures exposing
//! exactly the fields the pipeline consumes: qualified names, declared
//! interfaces, doc comments, parameters and annotation values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PropsError, Result};

/// One class or interface from the documentation model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    /// Fully-qualified dotted name, e.g. "com.example.ui.ButtonLabels"
    pub qualified_name: String,
    /// Declared interface types, used to classify the translatable kind
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Methods in declaration order, one per translatable property
    #[serde(default)]
    pub methods: Vec<MethodModel>,
}

/// One method from the documentation model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    /// Fully-qualified dotted name, e.g. "com.example.ui.ButtonLabels.okButton"
    pub qualified_name: String,
    /// Documentation comment text, empty when none was written
    #[serde(default)]
    pub comment: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamModel>,
    /// Annotations present on the method
    #[serde(default)]
    pub annotations: Vec<AnnotationModel>,
}

/// One method parameter from the documentation model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamModel {
    /// Declared parameter name, e.g. "name"
    pub name: String,
    /// Display string including the type, e.g. "String name"
    pub display: String,
    /// Names of annotations present on the parameter
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// An annotation value as recorded by the documentation host.
///
/// Single-valued annotations (DefaultMessage, Description, ...) carry one
/// entry in `values`; AlternateMessage carries a flat list of
/// literal/text pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationModel {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// The two translatable kinds the pipeline recognizes, plus the "anything
/// else" case for interfaces it ignores.
///
/// Ordering matters: tasks are sorted by kind first, with message sets
/// before constant sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TranslationKind {
    /// Parameterized message set (supports parameters and alternate forms)
    Messages,
    /// Simple constant set (plain key/value strings)
    Constants,
    /// Interface the extractor does not handle
    NotApplicable,
}

impl TranslationKind {
    /// Classify a declared interface type by its final dotted segment, so
    /// both "Messages" and "com.google.gwt.i18n.client.Messages" match.
    pub fn for_interface(name: &str) -> Self {
        match name.rsplit('.').next() {
            Some("Messages") => TranslationKind::Messages,
            Some("Constants") => TranslationKind::Constants,
            _ => TranslationKind::NotApplicable,
        }
    }
}

/// The annotations the extractor is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    DefaultStringValue,
    DefaultMessage,
    Description,
    Meaning,
    AlternateMessage,
    PluralCount,
    Select,
}

impl Annotation {
    /// Declared name of the annotation in the model
    pub fn name(self) -> &'static str {
        match self {
            Annotation::DefaultStringValue => "DefaultStringValue",
            Annotation::DefaultMessage => "DefaultMessage",
            Annotation::Description => "Description",
            Annotation::Meaning => "Meaning",
            Annotation::AlternateMessage => "AlternateMessage",
            Annotation::PluralCount => "PluralCount",
            Annotation::Select => "Select",
        }
    }

    /// True if the annotation appears on the method
    pub fn exists_in(self, method: &MethodModel) -> bool {
        method.annotations.iter().any(|a| a.name == self.name())
    }

    /// First value of the annotation on the method, if present
    pub fn value_in(self, method: &MethodModel) -> Option<&str> {
        method
            .annotations
            .iter()
            .find(|a| a.name == self.name())
            .and_then(|a| a.values.first())
            .map(String::as_str)
    }

    /// All values of the annotation on the method, if present
    pub fn values_in(self, method: &MethodModel) -> Option<&[String]> {
        method
            .annotations
            .iter()
            .find(|a| a.name == self.name())
            .map(|a| a.values.as_slice())
    }

    /// True if the annotation appears on the parameter
    pub fn exists_on(self, param: &ParamModel) -> bool {
        param.annotations.iter().any(|a| a == self.name())
    }
}

/// Load the documentation-model snapshot from a JSON file.
///
/// The file holds a JSON array of classes, each with its interfaces,
/// methods, parameters and annotation values.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON or JSON not matching the snapshot shape
pub fn load_model(path: &Path) -> Result<Vec<ClassModel>> {
    let content = fs::read_to_string(path).map_err(|e| PropsError::ModelRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| PropsError::ModelParse {
        path: path.to_path_buf(),
        source: e,
    })
}
