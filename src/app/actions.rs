//! Commit operations
//!
//! Each operation marks the view-model busy, spawns the API call, and
//! returns immediately. Completions come back through
//! [`App::poll_requests`] (or [`App::settle`] in tests).

use super::state::App;
use crate::model::{CommitId, CommitPatch, NewCommit, Notification};
use crate::ui::components::{Dialog, DialogCallback, DialogResult};
use crate::view_model::Action;

impl App {
    /// Fetch the commit list (mount-time load, `r`, Ctrl+L)
    pub fn reload(&mut self) {
        for action in self.requests.load() {
            self.view_model.apply(action);
        }
    }

    /// Ask before deleting. Refused while the same id is already being deleted.
    pub(crate) fn request_delete(&mut self, id: CommitId) {
        if !self.view_model.can_delete(&id) {
            self.notification = Some(Notification::warning("Delete already in progress"));
            return;
        }

        let detail = self.view_model.record(&id).map(|r| r.header.clone());
        self.active_dialog = Some(Dialog::confirm(
            "Delete commit",
            "Delete this commit?",
            detail,
            DialogCallback::DeleteCommit(id),
        ));
    }

    pub(crate) fn handle_dialog_result(&mut self, callback: DialogCallback, result: DialogResult) {
        if result == DialogResult::Cancelled {
            return;
        }
        match callback {
            DialogCallback::DeleteCommit(id) => self.delete(id),
        }
    }

    /// `DELETE /commits/{id}` without confirmation
    pub fn delete(&mut self, id: CommitId) {
        if !self.view_model.apply(Action::DeleteStarted(id.clone())) {
            tracing::debug!(id = %id, "delete refused, already in flight");
            return;
        }
        self.requests.delete(id);
    }

    /// `PUT /commits/{id}`
    pub fn update(&mut self, id: CommitId, patch: CommitPatch) {
        self.view_model.apply(Action::UpdateStarted(id.clone()));
        self.requests.update(id, patch);
    }

    /// `POST /commits`. Refused while another create is in flight.
    pub fn create(&mut self, commit: NewCommit) {
        if !self.view_model.apply(Action::CreateStarted) {
            self.notification = Some(Notification::warning("Create already in progress"));
            return;
        }
        self.requests.create(commit);
    }

    /// Apply every completion that has arrived so far (non-blocking)
    pub fn poll_requests(&mut self) {
        for action in self.requests.drain() {
            self.apply_completion(action);
        }
    }

    /// Wait until nothing is in flight, applying completions as they arrive
    pub async fn settle(&mut self) {
        while let Some(action) = self.requests.next_completion().await {
            self.apply_completion(action);
        }
    }

    /// Feed one completion to the view-model, then update the views
    pub(crate) fn apply_completion(&mut self, action: Action) {
        let notification = match &action {
            Action::CreateFinished(Ok(record)) => {
                Some(Notification::success(format!("Created {}", record.header)))
            }
            Action::UpdateFinished { result: Ok(_), .. } => {
                Some(Notification::success("Commit updated"))
            }
            Action::DeleteFinished { result: Ok(()), .. } => {
                Some(Notification::success("Commit deleted"))
            }
            _ => None,
        };
        let created = matches!(action, Action::CreateFinished(Ok(_)));
        let loaded = matches!(action, Action::LoadFinished { .. });
        let failed = matches!(
            action,
            Action::LoadFinished { result: Err(_), .. }
                | Action::DeleteFinished { result: Err(_), .. }
                | Action::UpdateFinished { result: Err(_), .. }
                | Action::CreateFinished(Err(_))
        );

        if !self.view_model.apply(action) {
            tracing::debug!("stale completion dropped");
            return;
        }

        if failed && let Some(error) = self.view_model.error() {
            tracing::warn!(%error, "request failed");
        }
        if notification.is_some() {
            self.notification = notification;
        }
        if created {
            self.form_view.reset_description();
        }
        // Demo rows must not leak into the project options
        if (created || loaded) && !self.view_model.showing_fallback() {
            self.form_view.absorb_projects(self.view_model.records());
        }
        if loaded && self.view_model.showing_fallback() {
            self.notification = Some(Notification::warning("Showing demo data"));
        }

        self.step_back_from_empty_page();
        let rows = self.view_model.visible().rows.len();
        self.table_view.clamp_selection(rows);
    }

    /// After rows disappear the current page may lie past the end
    fn step_back_from_empty_page(&mut self) {
        let page = self.view_model.visible();
        if !page.rows.is_empty() || page.page <= page.total_pages.max(1) {
            return;
        }
        let last = page.total_pages.max(1);
        self.view_model.apply(Action::SetPage(last));
    }
}
