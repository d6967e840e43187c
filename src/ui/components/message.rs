//! Error and notification message components

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Dismiss hint appended to the error banner
pub const DISMISS_HINT: &str = "[x] dismiss";

/// Error banner line: `[red bg] Error: [/red bg] message  [x] dismiss`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", single_line(error)), Style::default().fg(Color::Red)),
        Span::styled(format!(" {DISMISS_HINT}"), Style::default().fg(Color::DarkGray)),
    ])
}

/// Notification suffix for a title bar.
///
/// Truncated with "…" when it would exceed `max_width`; empty when there is
/// no room at all.
pub fn build_notification_title(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    };

    // " | " + label + " " + message + " "
    let fixed = 3 + label.len() + 1;
    let message_width = notification.message.chars().count() + 1;

    let message = if fixed + message_width <= max_width {
        format!("{} ", notification.message)
    } else {
        let available = max_width.saturating_sub(fixed + 2);
        if available == 0 {
            return Line::default();
        }
        let truncated: String = notification.message.chars().take(available).collect();
        format!("{truncated}… ")
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{label} "),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}

/// Collapse multi-line server messages onto one banner line
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
