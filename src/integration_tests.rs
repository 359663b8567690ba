//! End-to-end tests for the export / edit / import round trip.
//!
//! These exercise the whole pipeline over a real directory tree: building
//! tasks from a model snapshot, rendering and writing the translation
//! files, simulating a translator's edit and importing the result back
//! into the source root.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;

    use crate::NO_TRANSLATION;
    use crate::config::{Config, Mode};
    use crate::merge::{self, ImportOutcome};
    use crate::model::{AnnotationModel, ClassModel, MethodModel, ParamModel};
    use crate::properties;
    use crate::task::build_tasks;

    fn greeting_class() -> ClassModel {
        ClassModel {
            qualified_name: "com.example.ui.Greetings".to_string(),
            interfaces: vec!["com.google.gwt.i18n.client.Messages".to_string()],
            methods: vec![MethodModel {
                qualified_name: "com.example.ui.Greetings.hello".to_string(),
                comment: "Greeting shown after login".to_string(),
                params: vec![ParamModel {
                    name: "name".to_string(),
                    display: "String name".to_string(),
                    annotations: vec![],
                }],
                annotations: vec![AnnotationModel {
                    name: "DefaultMessage".to_string(),
                    values: vec!["Hello {0}".to_string()],
                }],
            }],
        }
    }

    fn labels_class() -> ClassModel {
        ClassModel {
            qualified_name: "com.example.ui.Labels".to_string(),
            interfaces: vec!["com.google.gwt.i18n.client.Constants".to_string()],
            methods: vec![
                MethodModel {
                    qualified_name: "com.example.ui.Labels.ok".to_string(),
                    comment: "OK button".to_string(),
                    params: vec![],
                    annotations: vec![AnnotationModel {
                        name: "DefaultStringValue".to_string(),
                        values: vec!["OK".to_string()],
                    }],
                },
                MethodModel {
                    qualified_name: "com.example.ui.Labels.cancel".to_string(),
                    comment: String::new(),
                    params: vec![],
                    annotations: vec![],
                },
            ],
        }
    }

    fn config_for(root: &Path, mode: Mode) -> Config {
        Config {
            locale: "de".to_string(),
            source_roots: vec![root.to_path_buf()],
            mode,
        }
    }

    fn read_props(path: &Path) -> HashMap<String, String> {
        let content = fs::read_to_string(path).unwrap();
        properties::parse(&content, path).unwrap()
    }

    #[test]
    fn test_export_renders_expected_file() {
        let dir = tempfile::tempdir().unwrap();
        let source_root = dir.path().join("src");
        fs::create_dir_all(&source_root).unwrap();
        let config = config_for(&source_root, Mode::Export);

        let classes = vec![greeting_class()];
        let tasks = build_tasks(&classes, "de", &config.source_roots).unwrap();
        let stats = merge::export(&tasks, &config).unwrap();

        assert_eq!(stats.messages, 1);
        assert_eq!(stats.constants, 0);
        assert_eq!(stats.variations, 0);

        // Single-task run: the class segment is dropped from the root
        let expected = dir
            .path()
            .join("translation/de/com/example/ui/Greetings_de.properties");
        assert_eq!(stats.directory, expected.parent().unwrap());
        let text = fs::read_to_string(&expected).unwrap();

        assert!(text.contains("# Greeting shown after login"));
        assert!(text.contains("@DefaultValue=Hello {0}"));
        assert!(text.contains("# Message parameters"));
        assert!(text.contains("{0} String name"));
        assert!(text.contains("hello = TRANSLATE_ME"));
    }

    #[test]
    fn test_round_trip_drops_sentinel_and_keeps_edits() {
        let dir = tempfile::tempdir().unwrap();
        let source_root = dir.path().join("src");
        fs::create_dir_all(&source_root).unwrap();

        let classes = vec![greeting_class(), labels_class()];
        let config = config_for(&source_root, Mode::Export);
        let tasks = build_tasks(&classes, "de", &config.source_roots).unwrap();
        let stats = merge::export(&tasks, &config).unwrap();
        assert_eq!(stats.constants, 2);
        assert_eq!(stats.messages, 1);

        // Translator edits one label, leaves the rest untouched
        let labels_file = stats.directory.join("Labels_de.properties");
        let edited = fs::read_to_string(&labels_file)
            .unwrap()
            .replace("ok = TRANSLATE_ME", "ok = Gut");
        fs::write(&labels_file, edited).unwrap();

        let import_config = config_for(&source_root, Mode::Import);
        let outcome = merge::import(&tasks, &import_config).unwrap();
        assert_eq!(outcome, ImportOutcome::Imported { files: 2 });

        let labels = read_props(&source_root.join("com/example/ui/Labels_de.properties"));
        assert_eq!(labels.get("ok"), Some(&"Gut".to_string()));
        assert!(!labels.contains_key("cancel"));

        // Fully untranslated file still imports, just with no keys left
        let greetings = read_props(&source_root.join("com/example/ui/Greetings_de.properties"));
        assert!(greetings.is_empty());
    }

    #[test]
    fn test_reexport_picks_up_imported_translations() {
        let dir = tempfile::tempdir().unwrap();
        let source_root = dir.path().join("src");
        fs::create_dir_all(source_root.join("com/example/ui")).unwrap();
        fs::write(
            source_root.join("com/example/ui/Labels_de.properties"),
            "ok = Gut\n",
        )
        .unwrap();

        let classes = vec![labels_class()];
        let config = config_for(&source_root, Mode::Export);
        let tasks = build_tasks(&classes, "de", &config.source_roots).unwrap();
        let stats = merge::export(&tasks, &config).unwrap();

        let text = fs::read_to_string(stats.directory.join("Labels_de.properties")).unwrap();
        assert!(text.contains("ok = Gut"));
        assert!(text.contains(&format!("cancel = {}", NO_TRANSLATION)));
        // Missing doc comment falls back to the synthesized text
        assert!(text.contains("# Translation for 'cancel' (no doc comment supplied)"));
    }

    #[test]
    fn test_alternate_forms_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source_root = dir.path().join("src");
        fs::create_dir_all(&source_root).unwrap();

        let mut class = greeting_class();
        class.methods[0].annotations.push(AnnotationModel {
            name: "AlternateMessage".to_string(),
            values: vec!["one".to_string(), "Hello, just you".to_string()],
        });
        class.methods[0].params[0]
            .annotations
            .push("PluralCount".to_string());

        let config = config_for(&source_root, Mode::Export);
        let tasks = build_tasks(&[class], "de", &config.source_roots).unwrap();
        let stats = merge::export(&tasks, &config).unwrap();
        assert_eq!(stats.variations, 1);

        let file = stats.directory.join("Greetings_de.properties");
        let text = fs::read_to_string(&file).unwrap();
        assert!(text.contains("# [name]"));
        assert!(text.contains("if [one] Hello, just you"));
        assert!(text.contains("hello = TRANSLATE_ME"));
        assert!(text.contains("hello[one] = TRANSLATE_ME"));

        let edited = text.replace("hello[one] = TRANSLATE_ME", "hello[one] = Hallo, nur du");
        fs::write(&file, edited).unwrap();

        let outcome = merge::import(&tasks, &config_for(&source_root, Mode::Import)).unwrap();
        assert_eq!(outcome, ImportOutcome::Imported { files: 1 });

        let imported = read_props(&source_root.join("com/example/ui/Greetings_de.properties"));
        assert_eq!(imported.get("hello[one]"), Some(&"Hallo, nur du".to_string()));
        assert!(!imported.contains_key("hello"));
    }
}
