use serde::{Deserialize, Serialize};

/// Presentation of a collection page: the same data as rows or as cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Grid => "Grid",
        }
    }
}
