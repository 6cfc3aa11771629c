//! Reading and writing notebooks in the interchange format.
//!
//! Output follows the layout of the reference notebook tooling: keys sorted,
//! one-space indentation, UTF-8 text left unescaped, multiline text written as
//! line lists and a trailing newline.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use super::Notebook;
use super::source::split_lines;
use crate::error::{Result, notebook as errors};

const SUPPORTED_MAJOR: u64 = 4;

/// Non-`text/*` MIME types whose string payloads are still split into lines
const SPLIT_MIMES: &[&str] = &["application/javascript", "image/svg+xml"];

/// Parse a notebook from its JSON text
pub fn read(text: &str) -> Result<Notebook> {
    // Check the version first so old notebooks report that instead of a
    // shape mismatch.
    let value: Value = serde_json::from_str(text)?;
    let major = value.get("nbformat").and_then(Value::as_u64);
    let minor = value
        .get("nbformat_minor")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    match major {
        Some(SUPPORTED_MAJOR) => {}
        Some(other) => return Err(errors::unsupported_version(other, minor)),
        None => return Err(errors::parse_failed("missing 'nbformat' version field")),
    }

    let notebook: Notebook = serde_json::from_value(value)?;
    tracing::debug!(
        cells = notebook.cells.len(),
        minor = notebook.nbformat_minor,
        "read notebook"
    );
    Ok(notebook)
}

/// Serialize a notebook to JSON text
pub fn write(notebook: &Notebook) -> Result<String> {
    // `serde_json::Map` is ordered by key (no `preserve_order`), so going
    // through `Value` sorts every object.
    let mut value =
        serde_json::to_value(notebook).map_err(|e| errors::write_failed(e.to_string()))?;
    split_multiline_fields(&mut value);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| errors::write_failed(e.to_string()))?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| errors::write_failed(e.to_string()))
}

/// Write attachment, stream and rich output text as line lists
fn split_multiline_fields(notebook: &mut Value) {
    let Some(cells) = notebook.get_mut("cells").and_then(Value::as_array_mut) else {
        return;
    };
    for cell in cells {
        if let Some(attachments) = cell.get_mut("attachments").and_then(Value::as_object_mut) {
            attachments.values_mut().for_each(split_mimebundle);
        }
        if cell.get("cell_type").and_then(Value::as_str) != Some("code") {
            continue;
        }
        let Some(outputs) = cell.get_mut("outputs").and_then(Value::as_array_mut) else {
            continue;
        };
        for output in outputs {
            let kind = output
                .get("output_type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            match kind.as_str() {
                "execute_result" | "display_data" => {
                    if let Some(data) = output.get_mut("data") {
                        split_mimebundle(data);
                    }
                }
                "stream" => {
                    if let Some(text) = output.get_mut("text") {
                        split_text(text);
                    }
                }
                _ => {}
            }
        }
    }
}

fn split_mimebundle(bundle: &mut Value) {
    let Some(bundle) = bundle.as_object_mut() else {
        return;
    };
    for (mime, payload) in bundle.iter_mut() {
        if mime.starts_with("text/") || SPLIT_MIMES.contains(&mime.as_str()) {
            split_text(payload);
        }
    }
}

fn split_text(value: &mut Value) {
    if let Value::String(text) = value {
        let lines = split_lines(text)
            .into_iter()
            .map(|line| Value::String(line.to_string()))
            .collect();
        *value = Value::Array(lines);
    }
}
