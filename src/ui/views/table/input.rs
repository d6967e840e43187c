//! Input handling for TableView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;
use crate::model::{CommitId, CommitPatch, CommitRecord, SortField};
use crate::view_model::PageView;

use super::{InputMode, TableAction, TableView};

impl TableView {
    /// Handle key event and return action.
    ///
    /// `page` is what is currently on screen, `search` the active term.
    pub fn handle_key(&mut self, key: KeyEvent, page: &PageView<'_>, search: &str) -> TableAction {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key, page, search),
            InputMode::Search => self.handle_search_key(key),
            InputMode::EditHeader => self.handle_header_key(key, page),
            InputMode::EditDescription => self.handle_description_key(key, page),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, page: &PageView<'_>, search: &str) -> TableAction {
        let row_count = page.rows.len();
        match key.code {
            k if keys::is_move_down(k) => {
                self.move_down(row_count);
                TableAction::None
            }
            k if keys::is_move_up(k) => {
                self.move_up();
                TableAction::None
            }
            k if k == keys::GO_TOP => {
                self.move_to_top();
                TableAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.move_to_bottom(row_count);
                TableAction::None
            }
            k if keys::is_next_page(k) => {
                if page.has_next() {
                    self.selected = 0;
                    TableAction::SetPage(page.page + 1)
                } else {
                    TableAction::None
                }
            }
            k if keys::is_prev_page(k) => {
                if page.has_previous() {
                    self.selected = 0;
                    TableAction::SetPage(page.page - 1)
                } else {
                    TableAction::None
                }
            }
            k if k == keys::SEARCH_INPUT => {
                self.start_search(search);
                TableAction::None
            }
            k if k == keys::RELOAD => TableAction::Reload,
            k if k == keys::DELETE => match self.selected_id(page) {
                Some(id) => TableAction::Delete(id),
                None => TableAction::None,
            },
            k if k == keys::EDIT_HEADER => {
                if let Some(record) = self.selected_record(page)
                    && let Some(ref id) = record.id
                {
                    self.start_header_edit(id.clone(), &record.header);
                }
                TableAction::None
            }
            k if k == keys::EDIT_DESCRIPTION => {
                if let Some(record) = self.selected_record(page)
                    && let Some(ref id) = record.id
                {
                    let description = record.description.as_deref().unwrap_or("");
                    self.start_description_edit(id.clone(), description);
                }
                TableAction::None
            }
            KeyCode::Char(c) => match SortField::from_digit(c) {
                Some(field) => TableAction::ToggleSort(field),
                None => TableAction::None,
            },
            _ => TableAction::None,
        }
    }

    /// Every keystroke updates the filter; Enter keeps it, Esc clears it
    fn handle_search_key(&mut self, key: KeyEvent) -> TableAction {
        match key.code {
            k if k == keys::ESC => {
                self.cancel_input();
                self.selected = 0;
                TableAction::SetSearch(String::new())
            }
            k if k == keys::SUBMIT => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                TableAction::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                self.selected = 0;
                TableAction::SetSearch(self.input_buffer.clone())
            }
            KeyCode::Backspace => {
                if self.input_buffer.pop().is_none() {
                    return TableAction::None;
                }
                self.selected = 0;
                TableAction::SetSearch(self.input_buffer.clone())
            }
            _ => TableAction::None,
        }
    }

    fn handle_header_key(&mut self, key: KeyEvent, page: &PageView<'_>) -> TableAction {
        match key.code {
            k if k == keys::ESC => {
                self.cancel_input();
                TableAction::None
            }
            k if k == keys::SUBMIT => {
                let header = std::mem::take(&mut self.input_buffer).trim().to_string();
                let id = self.editing_id.take();
                self.input_mode = InputMode::Normal;

                let Some(id) = id else {
                    return TableAction::None;
                };
                // Empty = cancel (header is required)
                if header.is_empty() || unchanged(page, &id, |r| r.header == header) {
                    return TableAction::None;
                }
                TableAction::Update {
                    id,
                    patch: CommitPatch::header(header),
                }
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                TableAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                TableAction::None
            }
            _ => TableAction::None,
        }
    }

    fn handle_description_key(&mut self, key: KeyEvent, page: &PageView<'_>) -> TableAction {
        if keys::is_submit_form(&key) {
            let id = self.editing_id.take();
            let textarea = self.textarea.take();
            self.input_mode = InputMode::Normal;

            let (Some(id), Some(textarea)) = (id, textarea) else {
                return TableAction::None;
            };
            let description = textarea.lines().join("\n").trim_end().to_string();
            if unchanged(page, &id, |r| {
                r.description.as_deref().unwrap_or("") == description
            }) {
                return TableAction::None;
            }
            return TableAction::Update {
                id,
                patch: CommitPatch::description(description),
            };
        }

        if key.code == keys::ESC {
            self.cancel_input();
            return TableAction::None;
        }

        // All other keys delegate to textarea (Enter = newline, cursor movement, etc.)
        if let Some(ref mut textarea) = self.textarea {
            textarea.input(key);
        }
        TableAction::None
    }

    fn selected_id(&self, page: &PageView<'_>) -> Option<CommitId> {
        self.selected_record(page).and_then(|r| r.id.clone())
    }
}

/// Whether the record on screen already has the edited value
fn unchanged(page: &PageView<'_>, id: &CommitId, same: impl Fn(&CommitRecord) -> bool) -> bool {
    page.rows
        .iter()
        .find(|r| r.id.as_ref() == Some(id))
        .is_some_and(|r| same(r))
}
