//! Rendered table model: header labels and rows of typed cells.

/// What a cell holds, as far as row actions are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Primary-key column (`td.type-pk` in the host's markup).
    PrimaryKey,
    Data,
    /// Delete control appended by the installer.
    DeleteAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub text: String,
}

impl Cell {
    pub fn primary_key(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::PrimaryKey,
            text: text.into(),
        }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Data,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Trimmed text of the first primary-key cell, if it is non-empty.
    pub fn primary_key(&self) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.kind == CellKind::PrimaryKey)
            .map(|c| c.text.trim())
            .filter(|s| !s.is_empty())
    }

    /// Trimmed text of the first cell, if it is non-empty.
    pub fn first_cell(&self) -> Option<&str> {
        self.cells
            .first()
            .map(|c| c.text.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn has_delete_control(&self) -> bool {
        self.cells.iter().any(|c| c.kind == CellKind::DeleteAction)
    }
}

/// Which of the page's two tables an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableScope {
    /// The primary record table.
    Records,
    /// The owning-principals table on owner-management pages.
    Owners,
}

impl std::fmt::Display for TableScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableScope::Records => f.write_str("records"),
            TableScope::Owners => f.write_str("owners"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Row>,
    pub(super) augmented: bool,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            header,
            rows,
            augmented: false,
        }
    }

    /// True once delete controls have been installed.
    pub fn is_augmented(&self) -> bool {
        self.augmented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_key_is_first_pk_cell_trimmed() {
        let row = Row::new(vec![
            Cell::data("alice"),
            Cell::primary_key("  42\n"),
            Cell::primary_key("43"),
        ]);
        assert_eq!(row.primary_key(), Some("42"));
    }

    #[test]
    fn row_without_pk_has_no_identifier() {
        let row = Row::new(vec![Cell::data("x")]);
        assert_eq!(row.primary_key(), None);
        let blank = Row::new(vec![Cell::primary_key("   ")]);
        assert_eq!(blank.primary_key(), None);
    }

    #[test]
    fn first_cell_identifier() {
        let row = Row::new(vec![Cell::data(" 7 "), Cell::data("bob")]);
        assert_eq!(row.first_cell(), Some("7"));
        assert_eq!(Row::default().first_cell(), None);
    }
}
