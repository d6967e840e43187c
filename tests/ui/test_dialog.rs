//! Rendering tests for the delete confirmation dialog

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use commit_deck::model::CommitId;
use commit_deck::ui::components::{Dialog, DialogCallback};

use crate::screen_rows;

fn render(dialog: &Dialog, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| dialog.render(frame, frame.area()))
        .unwrap();
    screen_rows(terminal.backend())
}

#[test]
fn test_delete_dialog_with_header() {
    let dialog = Dialog::confirm(
        "Delete commit",
        "Delete this commit?",
        Some("feat(web): add login page".to_string()),
        DialogCallback::DeleteCommit(CommitId::new("c01")),
    );

    let rows = render(&dialog, 60, 12);
    let title = rows.iter().find(|r| r.contains("Delete commit")).unwrap();
    assert!(title.starts_with('┌'));
    assert!(rows.iter().any(|r| r.contains("Delete this commit?")));
    assert!(rows.iter().any(|r| r.contains("feat(web): add login page")));

    let buttons = rows.iter().find(|r| r.contains("[Y]")).unwrap();
    let buttons = buttons.trim_matches('│').trim();
    assert_snapshot!(buttons, @"[Y]es      [N]o");
}

#[test]
fn test_dialog_without_detail_is_shorter() {
    let dialog = Dialog::confirm(
        "Delete commit",
        "Delete this commit?",
        None,
        DialogCallback::DeleteCommit(CommitId::new("c01")),
    );

    let rows = render(&dialog, 60, 12);
    let drawn = rows.iter().filter(|r| !r.is_empty()).count();
    assert_eq!(drawn, 7);
}

#[test]
fn test_dialog_fits_tiny_terminal() {
    let dialog = Dialog::confirm(
        "Delete commit",
        "Delete this commit?",
        None,
        DialogCallback::DeleteCommit(CommitId::new("c01")),
    );

    // Must not panic when the terminal is smaller than the dialog
    let rows = render(&dialog, 12, 4);
    assert_eq!(rows.len(), 4);
}
