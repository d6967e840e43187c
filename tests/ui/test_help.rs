//! Rendering tests for the help panel

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use commit_deck::ui::widgets::render_help_panel;

use crate::screen_rows;

fn render(scroll: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(70, 50)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), scroll))
        .unwrap();
    screen_rows(terminal.backend())
}

#[test]
fn test_help_panel_title_and_sections() {
    let rows = render(0);
    assert!(rows[0].contains("commit-deck - Help"));

    let inner: Vec<&str> = rows
        .iter()
        .map(|r| r.trim_matches('│').trim())
        .collect();
    assert_snapshot!(inner[1], @"Key bindings:");
    for section in ["Global:", "Commit Table:", "Sort Columns:", "Commit Form:"] {
        assert!(inner.contains(&section), "missing section {section}");
    }
}

#[test]
fn test_help_panel_scrolls() {
    let top = render(0);
    let scrolled = render(2);
    assert!(top[1].contains("Key bindings:"));
    assert!(!scrolled[1].contains("Key bindings:"));
    assert!(scrolled[1].contains("Global:"));
}
