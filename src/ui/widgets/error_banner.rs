//! Error banner widget

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::ui::components;

/// Render the error one row above the status bar
pub fn render_error_banner(frame: &mut Frame, error: &str) {
    let area = frame.area();
    if area.height < 3 {
        return;
    }
    let error_area = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };

    frame.render_widget(ratatui::widgets::Clear, error_area);
    let error_line = components::build_error_line(error);
    frame.render_widget(Paragraph::new(error_line), error_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_banner_sits_above_status_bar() {
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|frame| render_error_banner(frame, "HTTP 500: boom"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..60u16).map(|x| buffer[(x, 4u16)].symbol()).collect();
        assert!(row.contains("Error:"));
        assert!(row.contains("HTTP 500: boom"));
        assert!(row.contains("[x] dismiss"));
    }

    #[test]
    fn test_tiny_terminal_skips_banner() {
        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        terminal
            .draw(|frame| render_error_banner(frame, "boom"))
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!content.contains("boom"));
    }
}
