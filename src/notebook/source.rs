//! Serde helpers for multiline cell text.
//!
//! Notebooks store text either as one string or as a list of lines that keep
//! their line endings. Both forms are read into a single `String`; writing
//! always uses the list form.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum MultilineText {
    Text(String),
    Lines(Vec<String>),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MultilineText::deserialize(deserializer)? {
        MultilineText::Text(text) => text,
        MultilineText::Lines(lines) => lines.concat(),
    })
}

#[allow(clippy::ptr_arg)]
pub fn serialize<S>(text: &String, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(split_lines(text))
}

/// Split text into lines, keeping each line's terminator.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}
