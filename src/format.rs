//! Rendering of a translation task as commented properties text.
//!
//! Every piece of metadata becomes a `#` comment block above the
//! `key = value` lines of an entry: the word-wrapped doc comment, any
//! `@Description`/`@Meaning`/`@DefaultValue` labels, an indexed parameter
//! list and an alternate-forms block. Comments wrap at a 90-character
//! budget without ever splitting a word.

use crate::entry::TranslatableEntry;
use crate::properties::escape_key;
use crate::task::TranslationTask;

const LINE_LENGTH: usize = 90;
const COMMENT_PREFIX: &str = "#";
const RULE: &str =
    "# ----------------------------------------------------------------------------------------";

/// Render one task as the full editable file contents
pub fn render_task(task: &TranslationTask) -> String {
    let header = format!(
        "This is a properties file defining constants or messages which require translation \
         into the locale '{}'. For each property please replace 'TRANSLATE_ME' with the \
         appropriate translation. Where available current default values and any documentation \
         are shown above each property to be translated.",
        task.locale
    );
    let mut out = wrap_comment(&header, " ", " ", false);
    for entry in &task.entries {
        out.push('\n');
        out.push_str(&render_entry(entry));
    }
    out
}

fn render_entry(entry: &TranslatableEntry) -> String {
    let mut out = wrap_comment(&entry.doc, " ", " ", false);
    if let Some(description) = &entry.description {
        out.push_str(&format_meta("@Description=", description));
    }
    if let Some(meaning) = &entry.meaning {
        out.push_str(&format_meta("@Meaning=", meaning));
    }
    out.push_str(&format_meta("@DefaultValue=", &entry.default_value));
    out.push_str(&format_param_list(&entry.params));
    out.push_str(&format_alternate_forms(&entry.forms, &entry.form_params));
    out.push_str(RULE);
    out.push('\n');
    for (key, value) in &entry.values {
        out.push_str(&escape_key(key));
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// A labeled metadata line such as `@DefaultValue=Hello {0}`, preceded by a
/// rule and wrapped with a hanging indent matching the label width
fn format_meta(label: &str, value: &str) -> String {
    let indent = " ".repeat(label.chars().count() + 2);
    wrap_comment(&format!("{}{}", label, value), &indent, " ", true)
}

/// The "Message parameters" block, one line per parameter prefixed with its
/// positional index in braces
fn format_param_list(params: &[String]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&wrap_comment("Message parameters", " ", " ", false));
    for (index, display) in params.iter().enumerate() {
        let label = format!("{{{}}} {}", index, display);
        let indent = " ".repeat(format!("{{}}{}", index).chars().count() + 2);
        out.push_str(&wrap_comment(&label, &indent, "  ", false));
    }
    out
}

/// The alternate-forms block: explanatory text, the ordered form-control
/// parameter names joined with `|`, and one `if <form-key> <text>` line per
/// form with keys padded to a shared width
fn format_alternate_forms(forms: &[(String, String)], form_params: &[String]) -> String {
    if forms.is_empty() || form_params.is_empty() {
        return String::new();
    }
    let longest = forms
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&wrap_comment(
        "This message has alternate forms depending on the values of one or more of the input \
         parameters. The variations and their corresponding defaults are shown below, the \
         parameters are specified in order and separated with the | character.",
        " ",
        " ",
        false,
    ));
    out.push_str(COMMENT_PREFIX);
    out.push('\n');
    out.push_str(&wrap_comment(
        &format!("[{}]", form_params.join("|")),
        " ",
        " ",
        false,
    ));
    for (key, text) in forms {
        out.push_str(&wrap_comment(
            &format!("if {} {}", pad(key, longest), text),
            &" ".repeat(longest + 7),
            "   ",
            false,
        ));
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let mut padded = s.to_string();
    while padded.chars().count() < width {
        padded.push(' ');
    }
    padded
}

/// Word-wrap `text` into comment lines.
///
/// Words are split on single spaces and accumulated until the next word
/// would push the line past the column budget, then the line is flushed and
/// a new one started with the continuation indent. A word is never split
/// internally. Empty text renders as nothing.
fn wrap_comment(text: &str, indent: &str, first_indent: &str, rule_before: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    if rule_before {
        out.push_str(RULE);
        out.push('\n');
    }
    let mut line = format!("{}{}", COMMENT_PREFIX, first_indent);
    let mut first_word = true;
    for word in text.split(' ') {
        if line.chars().count() + word.chars().count() > LINE_LENGTH {
            out.push_str(&line);
            out.push('\n');
            line = format!("{}{}", COMMENT_PREFIX, indent);
            first_word = true;
        }
        if !first_word {
            line.push(' ');
        }
        line.push_str(word);
        first_word = false;
    }
    if !first_word {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
