//! Table View - the commit history
//!
//! Shows one page of the filtered and sorted records. Search, sort and page
//! changes are handed back to the App as [`TableAction`]s; the view-model
//! owns the actual controls.

mod input;
mod render;


use tui_textarea::TextArea;

use crate::model::{CommitId, CommitPatch, CommitRecord, SortField, SortSpec};
use crate::view_model::PageView;

/// Input mode for Table View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Live search input (every keystroke re-filters)
    Search,
    /// Single-line header edit for the selected record
    EditHeader,
    /// Multi-line description edit (TextArea)
    EditDescription,
}

impl InputMode {
    pub fn input_bar_meta(self) -> Option<(&'static str, &'static str)> {
        match self {
            InputMode::Search => Some(("Search: ", " / Search ")),
            InputMode::EditHeader => Some(("Header: ", " e Edit header ")),
            // EditDescription uses TextArea, not input bar
            InputMode::EditDescription | InputMode::Normal => None,
        }
    }

    pub fn is_input(self) -> bool {
        self != InputMode::Normal
    }
}

/// Actions that TableView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// No action needed
    None,
    /// Fetch the commit list again
    Reload,
    /// Ask for confirmation, then delete
    Delete(CommitId),
    /// Send a partial update
    Update { id: CommitId, patch: CommitPatch },
    /// Replace the search term
    SetSearch(String),
    /// Sort by a column (flips direction when already active)
    ToggleSort(SortField),
    /// Go to a page (1-based)
    SetPage(usize),
}

/// Everything the table needs from the view-model to draw itself
#[derive(Debug, Clone, Copy)]
pub struct TableContext<'a> {
    pub search: &'a str,
    pub sort: SortSpec,
    pub loading: bool,
    pub showing_fallback: bool,
    pub deleting: Option<&'a CommitId>,
    pub updating: Option<&'a CommitId>,
    pub focused: bool,
}

pub mod empty_text {
    pub const TITLE: &str = "No commits found";
    pub const LOADING: &str = "Loading commits…";
    pub const SEARCH_HINT: &str = "Hint: press / then Esc to clear the search";
}

/// Table View state
#[derive(Debug, Default)]
pub struct TableView {
    /// Selected row on the current page
    pub selected: usize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Input buffer for search and header edits
    pub input_buffer: String,
    /// Record being edited (EditHeader / EditDescription)
    pub editing_id: Option<CommitId>,
    /// Text area for multi-line description input
    pub(crate) textarea: Option<TextArea<'static>>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record under the cursor on the given page
    pub fn selected_record<'a>(&self, page: &PageView<'a>) -> Option<&'a CommitRecord> {
        page.rows.get(self.selected).copied()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_bottom(&mut self, row_count: usize) {
        self.selected = row_count.saturating_sub(1);
    }

    /// Keep the cursor on a row after the page shrank
    pub fn clamp_selection(&mut self, row_count: usize) {
        if self.selected >= row_count {
            self.selected = row_count.saturating_sub(1);
        }
    }

    fn start_search(&mut self, current: &str) {
        self.input_mode = InputMode::Search;
        self.input_buffer = current.to_string();
    }

    fn start_header_edit(&mut self, id: CommitId, header: &str) {
        self.input_mode = InputMode::EditHeader;
        self.input_buffer = header.to_string();
        self.editing_id = Some(id);
    }

    fn start_description_edit(&mut self, id: CommitId, description: &str) {
        let textarea = if description.is_empty() {
            TextArea::default()
        } else {
            TextArea::new(description.lines().map(str::to_string).collect())
        };
        self.input_mode = InputMode::EditDescription;
        self.textarea = Some(textarea);
        self.editing_id = Some(id);
    }

    /// Leave any input mode without applying it
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.editing_id = None;
        self.textarea = None;
    }
}
