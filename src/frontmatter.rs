//! Parse notebook front matter from the first cell.
//!
//! The first cell holds YAML between `---` markers. Only `title` and
//! `insert_colab_badge` are interpreted; other keys are ignored.

use serde_yaml::Value;

use crate::error::{Result, frontmatter as errors};

/// Title used when the front matter has none
pub const DEFAULT_TITLE: &str = "Notebook Title";

const DELIMITER: &str = "---";

/// Interpreted front-matter values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub insert_colab_badge: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            insert_colab_badge: false,
        }
    }
}

/// Parse front matter from a cell's source text.
///
/// Surrounding `---` markers are optional. Empty text yields the defaults.
pub fn parse(source: &str) -> Result<FrontMatter> {
    let yaml = strip_delimiters(source);
    let value: Value = serde_yaml::from_str(yaml)?;

    let mapping = match &value {
        Value::Null => return Ok(FrontMatter::default()),
        Value::Mapping(mapping) => mapping,
        other => return Err(errors::not_a_mapping(describe(other))),
    };

    let title = match mapping.get("title") {
        None | Some(Value::Null) => DEFAULT_TITLE.to_string(),
        Some(v) => scalar_to_string(v).unwrap_or_else(|| {
            tracing::warn!("front matter 'title' is not a scalar, using default");
            DEFAULT_TITLE.to_string()
        }),
    };
    let insert_colab_badge = mapping.get("insert_colab_badge").is_some_and(is_truthy);

    let front_matter = FrontMatter {
        title,
        insert_colab_badge,
    };
    tracing::debug!(?front_matter, "parsed front matter");
    Ok(front_matter)
}

fn strip_delimiters(source: &str) -> &str {
    let text = source.trim();
    let text = text.strip_prefix(DELIMITER).unwrap_or(text);
    text.strip_suffix(DELIMITER).unwrap_or(text)
}

/// Plain scalars YAML 1.1 reads as booleans; YAML 1.2 parsers leave them as
/// strings.
fn yaml11_bool(s: &str) -> Option<bool> {
    match s {
        "yes" | "Yes" | "YES" | "on" | "On" | "ON" => Some(true),
        "no" | "No" | "NO" | "off" | "Off" | "OFF" => Some(false),
        _ => None,
    }
}

fn bool_to_title(b: bool) -> String {
    let text = if b { "True" } else { "False" };
    text.to_string()
}

/// Render a scalar YAML value as text (strings verbatim).
///
/// Booleans render capitalised, YAML 1.1 words included: `title: yes` gives
/// `True`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(yaml11_bool(s).map_or_else(|| s.clone(), bool_to_title)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(bool_to_title(*b)),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => yaml11_bool(s).unwrap_or(!s.is_empty()),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
