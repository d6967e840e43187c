//! Input handling for FormView

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keys;

use super::{FormAction, FormField, FormView};

impl FormView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        // Ctrl+S submits from any field
        if keys::is_submit_form(&key) {
            return self.submit();
        }

        match key.code {
            k if k == keys::TAB || k == keys::BACK_TAB => return FormAction::FocusTable,
            KeyCode::Down => {
                self.focus(self.focused.next());
                return FormAction::None;
            }
            KeyCode::Up => {
                self.focus(self.focused.previous());
                return FormAction::None;
            }
            _ => {}
        }

        if self.focused == FormField::Description {
            self.handle_description_key(key)
        } else {
            self.handle_selector_key(key)
        }
    }

    fn handle_selector_key(&mut self, key: KeyEvent) -> FormAction {
        let Some(selector) = self.selector_mut(self.focused) else {
            return FormAction::None;
        };

        match key.code {
            k if k == keys::ESC => {
                if !selector.clear_query() {
                    return FormAction::FocusTable;
                }
            }
            k if k == keys::SUBMIT => {
                selector.confirm();
                self.validation_error = None;
            }
            KeyCode::Left => selector.previous(),
            KeyCode::Right => selector.next(),
            KeyCode::Backspace => selector.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                selector.push_char(c);
            }
            _ => {}
        }
        FormAction::None
    }

    fn handle_description_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            k if k == keys::SUBMIT => self.submit(),
            k if k == keys::ESC => FormAction::FocusTable,
            _ => {
                // Everything else edits the text (cursor movement, Backspace, ...)
                if self.description.input(key) {
                    self.validation_error = None;
                }
                FormAction::None
            }
        }
    }
}
