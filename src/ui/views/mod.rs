//! View components
//!
//! The dashboard is split into the commit form (top) and the commit table.

pub mod form;
pub mod table;

pub use form::{FORM_HEIGHT, FormAction, FormField, FormView, ValidationError};
pub use table::{InputMode, TableAction, TableContext, TableView};
