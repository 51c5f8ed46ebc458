//! Appending delete controls to a rendered table.

use super::model::{Cell, CellKind, Table};

/// Header label of the appended column.
pub const DELETE_HEADER_LABEL: &str = "delete";
/// Content of each appended action cell.
pub const DELETE_ICON: &str = "🗑️";

impl Table {
    /// Appends a `delete` header cell and one action cell per body row.
    ///
    /// Idempotent: returns `false` and leaves the table untouched when it was
    /// already augmented.
    pub fn install_delete_controls(&mut self) -> bool {
        if self.augmented {
            return false;
        }
        self.header.push(DELETE_HEADER_LABEL.to_string());
        for row in &mut self.rows {
            row.cells.push(Cell {
                kind: CellKind::DeleteAction,
                text: DELETE_ICON.to_string(),
            });
        }
        self.augmented = true;
        true
    }
}
