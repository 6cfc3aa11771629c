//! Notebook document model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::source;

/// Kind of a notebook cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
    Raw,
}

/// A single notebook cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub metadata: Map<String, Value>,

    #[serde(
        default,
        deserialize_with = "source::deserialize",
        serialize_with = "source::serialize"
    )]
    pub source: String,

    /// Outputs, execution count, attachments and anything else, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    /// Create a new markdown cell with empty metadata
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            cell_type: CellType::Markdown,
            id: None,
            metadata: Map::new(),
            source: source.into(),
            extra: Map::new(),
        }
    }
}

/// A notebook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<Cell>,

    #[serde(default)]
    pub metadata: Map<String, Value>,

    pub nbformat: u64,

    pub nbformat_minor: u64,
}

/// First minor version of nbformat 4 that carries cell ids
const CELL_ID_MINOR: u64 = 5;

impl Notebook {
    /// Whether cells in this notebook carry an `id` field
    pub fn has_cell_ids(&self) -> bool {
        self.nbformat_minor >= CELL_ID_MINOR
    }

    /// Insert a cell at `index`, clamped to the end of the cell list.
    ///
    /// Notebooks that carry cell ids get a fresh id for the new cell when it
    /// has none.
    pub fn insert_cell(&mut self, index: usize, mut cell: Cell) {
        if self.has_cell_ids() && cell.id.is_none() {
            let id = self.unique_cell_id(&cell.source);
            tracing::debug!(id = %id, "generated cell id");
            cell.id = Some(id);
        }
        let index = index.min(self.cells.len());
        self.cells.insert(index, cell);
    }

    /// Derive an 8 hex digit id from the cell text, unique within this notebook
    fn unique_cell_id(&self, source: &str) -> String {
        let taken = |id: &str| self.cells.iter().any(|c| c.id.as_deref() == Some(id));
        let mut counter: u64 = 0;
        loop {
            let mut hasher = blake3::Hasher::new();
            hasher.update(source.as_bytes());
            hasher.update(&counter.to_le_bytes());
            let hex = hasher.finalize().to_hex();
            let id = hex[..8].to_string();
            if !taken(&id) {
                return id;
            }
            counter += 1;
        }
    }
}
