//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, Focus, View};
use crate::keys::{self, KeyHint};
use crate::model::Notification;
use crate::ui::views::{FORM_HEIGHT, TableContext};
use crate::ui::widgets::{render_error_banner, render_help_panel, render_status_bar};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        match self.current_view {
            View::Dashboard => self.render_dashboard(frame, notification.as_ref()),
            View::Help => self.render_help_view(frame),
        }

        // Error banner sits above the status bar
        if let Some(error) = self.view_model.error() {
            render_error_banner(frame, error);
        }

        // Dialog overlays everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, frame.area());
        }
    }

    fn render_dashboard(&self, frame: &mut Frame, notification: Option<&Notification>) {
        let area = self.main_area(frame);
        let [form_area, table_area] =
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(5)]).areas(area);

        self.form_view.render(
            frame,
            form_area,
            self.focus == Focus::Form,
            self.view_model.is_creating(),
        );

        let page = self.view_model.visible();
        let ctx = TableContext {
            search: self.view_model.search(),
            sort: self.view_model.sort(),
            loading: self.view_model.is_loading(),
            showing_fallback: self.view_model.showing_fallback(),
            deleting: self.view_model.deleting(),
            updating: self.view_model.updating(),
            focused: self.focus == Focus::Table && self.active_dialog.is_none(),
        };
        self.table_view
            .render(frame, table_area, &page, &ctx, notification);

        render_status_bar(frame, self.status_hints());
    }

    fn render_help_view(&self, frame: &mut Frame) {
        let area = self.main_area(frame);
        render_help_panel(frame, area, self.help_scroll);
    }

    /// Frame minus the status bar row and, when shown, the error banner row
    fn main_area(&self, frame: &Frame) -> Rect {
        let mut area = frame.area();
        let reserved = if self.view_model.error().is_some() { 2 } else { 1 };
        area.height = area.height.saturating_sub(reserved);
        area
    }

    fn status_hints(&self) -> &'static [KeyHint] {
        if self.active_dialog.is_some() {
            keys::DIALOG_HINTS
        } else if self.focus == Focus::Form {
            keys::FORM_HINTS
        } else if self.table_view.input_mode.is_input() {
            keys::TABLE_INPUT_HINTS
        } else {
            keys::TABLE_HINTS
        }
    }
}
