//! Row actions on the host's rendered tables.
//!
//! The host renders a record table (and, on owner-management pages, a table
//! of owning principals). The installer appends a delete control to each row;
//! the handlers in [`action`] turn a click into a CSRF-protected mutation.

mod action;
mod install;
mod model;

pub use action::{delete_record, remove_owner, PageEffect, RowActionError};
pub use install::{DELETE_HEADER_LABEL, DELETE_ICON};
pub use model::{Cell, CellKind, Row, Table, TableScope};
