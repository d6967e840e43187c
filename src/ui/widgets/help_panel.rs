//! Help panel widget
//!
//! Key binding reference built from the tables in [`crate::keys`].

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// All help panel lines, section by section
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Commit Table", keys::TABLE_KEYS);
    push_section(&mut lines, "Sort Columns", keys::SORT_KEYS);
    push_section(&mut lines, "Commit Form", keys::FORM_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[(&str, &str)]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for (key, description) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:10}"), Style::default().fg(Color::Yellow)),
            Span::raw(description.to_string()),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render help content. `scroll` is the vertical offset (0 = top).
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" commit-deck - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_every_key_table_is_listed() {
        let lines = build_help_lines();
        let entries = keys::GLOBAL_KEYS.len()
            + keys::TABLE_KEYS.len()
            + keys::SORT_KEYS.len()
            + keys::FORM_KEYS.len();
        // header + blank, then per section: title + entries + blank
        assert_eq!(lines.len(), 2 + 4 * 2 + entries);
    }

    #[test]
    fn test_sort_section_lists_columns() {
        let lines: Vec<String> = build_help_lines().iter().map(text).collect();
        assert!(lines.iter().any(|l| l == "Sort Columns:"));
        assert!(lines.iter().any(|l| l.starts_with("  7") && l.ends_with("Created")));
    }
}
