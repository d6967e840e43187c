//! Application state and view management

use tokio::runtime::Handle;

use super::tasks::Dispatcher;
use crate::api::{ApiError, CommitClient};
use crate::config::Config;
use crate::model::Notification;
use crate::ui::components::Dialog;
use crate::ui::views::{FormView, TableView};
use crate::view_model::ViewModel;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Help,
}

/// Which half of the dashboard receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Form,
    #[default]
    Table,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Focused dashboard pane
    pub focus: Focus,
    /// Records, table controls, busy indicators and the error banner
    pub view_model: ViewModel,
    /// Table view state
    pub table_view: TableView,
    /// Form view state
    pub form_view: FormView,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// In-flight API requests
    pub(crate) requests: Dispatcher,
}

impl App {
    /// Construct a new instance of [`App`] and start the first load.
    ///
    /// Requests are spawned on `runtime`.
    pub fn new(config: &Config, runtime: Handle) -> Result<Self, ApiError> {
        let client = CommitClient::new(&config.api_url, config.request_timeout())?;
        tracing::info!(api_url = %client.base_url(), "starting");

        let mut app = Self {
            running: true,
            current_view: View::Dashboard,
            focus: Focus::default(),
            view_model: ViewModel::new(config.page_size, config.fallback_policy()),
            table_view: TableView::new(),
            form_view: FormView::new(),
            notification: None,
            active_dialog: None,
            help_scroll: 0,
            requests: Dispatcher::new(client, runtime, config.cancel_superseded_loads),
        };

        // Load initial commits
        app.reload();

        Ok(app)
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.help_scroll = 0;
        }
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Form {
            let field = self.form_view.focused;
            self.form_view.focus(field);
        }
    }

    /// Abort outstanding requests and stop the event loop.
    pub fn quit(&mut self) {
        for action in self.requests.cancel_all() {
            self.view_model.apply(action);
        }
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }

    /// Requests started but not yet reported back
    pub fn requests_in_flight(&mut self) -> usize {
        self.requests.in_flight()
    }
}
