//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, Focus, View};
use crate::keys;
use crate::ui::views::{FormAction, TableAction};
use crate::view_model::Action;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C / Ctrl+Q quit from anywhere
        if keys::is_force_quit(&key) {
            self.quit();
            return;
        }

        // Dialog gets every key while open
        if let Some(dialog) = self.active_dialog.take() {
            match dialog.handle_key(key) {
                Some(result) => self.handle_dialog_result(dialog.callback, result),
                None => self.active_dialog = Some(dialog),
            }
            return;
        }

        if self.current_view == View::Help {
            self.handle_help_key(key);
            return;
        }

        if keys::is_refresh_key(&key) {
            self.reload();
            return;
        }

        match self.focus {
            Focus::Form => {
                let action = self.form_view.handle_key(key);
                self.handle_form_action(action);
            }
            Focus::Table => {
                // In input mode the table takes every key (skip global handling)
                if self.table_view.input_mode.is_input() || !self.handle_global_key(key) {
                    self.handle_table_key(key);
                }
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.quit();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB | keys::BACK_TAB => {
                self.set_focus(Focus::Form);
                true
            }
            keys::DISMISS_ERROR => {
                self.view_model.apply(Action::DismissError);
                true
            }
            _ => false,
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::QUIT | keys::ESC | keys::HELP => self.go_to_view(View::Dashboard),
            k if keys::is_move_down(k) => self.help_scroll = self.help_scroll.saturating_add(1),
            k if keys::is_move_up(k) => self.help_scroll = self.help_scroll.saturating_sub(1),
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let action = {
            let page = self.view_model.visible();
            self.table_view
                .handle_key(key, &page, self.view_model.search())
        };
        self.handle_table_action(action);
    }

    fn handle_table_action(&mut self, action: TableAction) {
        match action {
            TableAction::None => {}
            TableAction::Reload => self.reload(),
            TableAction::Delete(id) => self.request_delete(id),
            TableAction::Update { id, patch } => self.update(id, patch),
            TableAction::SetSearch(term) => {
                self.view_model.apply(Action::SetSearch(term));
            }
            TableAction::ToggleSort(field) => {
                self.view_model.apply(Action::ToggleSort(field));
            }
            TableAction::SetPage(page) => {
                self.view_model.apply(Action::SetPage(page));
            }
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::None => {}
            FormAction::Submit(commit) => self.create(commit),
            // Nothing is sent; the message goes to the error banner
            FormAction::Invalid(error) => {
                tracing::debug!(%error, "form submit refused");
                self.view_model.apply(Action::ValidationFailed(error.to_string()));
            }
            FormAction::FocusTable => self.set_focus(Focus::Table),
        }
    }
}
