//! Tests for FormView

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::keys;
use crate::model::{CommitId, CommitRecord, NewCommit};

use super::render::{FORM_HEIGHT, selector_line};
use super::{FormAction, FormField, FormView, ValidationError};

fn press(view: &mut FormView, code: KeyCode) -> FormAction {
    view.handle_key(KeyEvent::from(code))
}

fn type_text(view: &mut FormView, text: &str) {
    for c in text.chars() {
        press(view, KeyCode::Char(c));
    }
}

fn ctrl_s() -> KeyEvent {
    KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
}

/// Fill every selector by typing a new option and confirming it
fn filled_form() -> FormView {
    let mut view = FormView::new();
    for value in ["web", "development", "add", "feat"] {
        type_text(&mut view, value);
        press(&mut view, keys::SUBMIT);
        press(&mut view, KeyCode::Down);
    }
    view
}

fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_form_view_new() {
    let view = FormView::new();
    assert_eq!(view.focused, FormField::Project);
    assert!(view.project.options().is_empty());
    assert_eq!(view.lifecycle.options().len(), super::LIFECYCLE_OPTIONS.len());
    assert!(view.description_text().is_empty());
    assert!(view.validation_error.is_none());
}

#[test]
fn test_field_focus_cycles() {
    let mut view = FormView::new();
    press(&mut view, KeyCode::Up);
    assert_eq!(view.focused, FormField::Description);
    press(&mut view, KeyCode::Down);
    assert_eq!(view.focused, FormField::Project);
    press(&mut view, KeyCode::Down);
    assert_eq!(view.focused, FormField::Lifecycle);
}

#[test]
fn test_tab_hands_focus_to_table() {
    let mut view = FormView::new();
    assert_eq!(press(&mut view, keys::TAB), FormAction::FocusTable);
    assert_eq!(press(&mut view, keys::BACK_TAB), FormAction::FocusTable);
}

#[test]
fn test_esc_clears_filter_before_leaving() {
    let mut view = FormView::new();
    type_text(&mut view, "we");
    assert_eq!(press(&mut view, keys::ESC), FormAction::None);
    assert!(view.project.query().is_empty());
    assert_eq!(press(&mut view, keys::ESC), FormAction::FocusTable);
}

#[test]
fn test_create_project_is_slugified() {
    let mut view = FormView::new();
    type_text(&mut view, "Billing Service");
    press(&mut view, keys::SUBMIT);

    assert_eq!(view.project.value(), Some("billing-service"));
    assert_eq!(view.project.selected_label(), Some("Billing Service"));
}

#[test]
fn test_cycle_and_pick_lifecycle() {
    let mut view = FormView::new();
    press(&mut view, KeyCode::Down);
    press(&mut view, KeyCode::Right);
    press(&mut view, keys::SUBMIT);
    assert_eq!(view.lifecycle.value(), Some("development"));
}

#[test]
fn test_submit_empty_form_names_every_field() {
    let mut view = FormView::new();
    let action = view.handle_key(ctrl_s());

    let expected = ValidationError::MissingFields(vec![
        "project",
        "lifecycle",
        "action",
        "type",
        "description",
    ]);
    assert_eq!(action, FormAction::Invalid(expected.clone()));
    assert_eq!(view.validation_error, Some(expected));
}

#[test]
fn test_validation_message() {
    let error = ValidationError::MissingFields(vec!["project", "description"]);
    insta::assert_snapshot!(error.to_string(), @"Please fill in: project, description");
}

#[test]
fn test_submit_missing_description_only() {
    let mut view = filled_form();
    assert_eq!(view.focused, FormField::Description);

    let action = press(&mut view, keys::SUBMIT);
    assert_eq!(
        action,
        FormAction::Invalid(ValidationError::MissingFields(vec!["description"]))
    );
}

#[test]
fn test_submit_builds_commit_with_header() {
    let mut view = filled_form();
    type_text(&mut view, "add login page");

    let action = press(&mut view, keys::SUBMIT);
    assert_eq!(
        action,
        FormAction::Submit(NewCommit {
            project: "web".to_string(),
            lifecycle: "development".to_string(),
            action: "add".to_string(),
            commit_type: "feat".to_string(),
            header: "feat(web): add login page".to_string(),
            description: "add login page".to_string(),
        })
    );
    assert!(view.validation_error.is_none());
}

#[test]
fn test_header_uses_first_description_line() {
    let mut view = filled_form();
    view.set_description("  first line  \nsecond line");

    let Ok(commit) = view.validate() else {
        panic!("form should be valid");
    };
    assert_eq!(commit.header, "feat(web): first line");
    assert_eq!(commit.description, "first line  \nsecond line");
}

#[test]
fn test_preview_header_with_blanks() {
    let mut view = FormView::new();
    assert_eq!(view.preview_header(), "?(?): ");
    view.set_description("draft");
    assert_eq!(view.preview_header(), "?(?): draft");
}

#[test]
fn test_reset_description_keeps_selectors() {
    let mut view = filled_form();
    type_text(&mut view, "something");
    view.reset_description();

    assert!(view.description_text().is_empty());
    assert_eq!(view.project.value(), Some("web"));
    assert_eq!(view.commit_type.value(), Some("feat"));
}

#[test]
fn test_absorb_projects_from_records() {
    let mut view = FormView::new();
    let record = |project: &str| CommitRecord {
        id: Some(CommitId::new(project)),
        project: project.to_string(),
        lifecycle: "development".to_string(),
        action: "add".to_string(),
        commit_type: "feat".to_string(),
        header: format!("feat({project}): x"),
        description: None,
        created_at: None,
        updated_at: None,
    };
    view.absorb_projects(&[record("auth"), record("api"), record("auth")]);

    let values: Vec<_> = view.project.options().iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["auth", "api"]);
}

#[test]
fn test_selector_line_states() {
    let mut view = FormView::new();
    assert_eq!(line_text(&selector_line(&view.project, false)), "...");

    type_text(&mut view, "web app");
    assert_eq!(
        line_text(&selector_line(&view.project, true)),
        "+ Create \"web app\""
    );

    press(&mut view, keys::SUBMIT);
    assert_eq!(line_text(&selector_line(&view.project, false)), "web app");
    assert_eq!(line_text(&selector_line(&view.project, true)), "‹ ✓ web app ›");
}

#[test]
fn test_render_form() {
    let mut view = filled_form();
    type_text(&mut view, "add login page");

    let backend = TestBackend::new(100, FORM_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), true, true))
        .unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Commit Message Generator"));
    assert!(screen.contains("Lifecycle"));
    assert!(screen.contains("development"));
    assert!(screen.contains("feat(web): add login page"));
    assert!(screen.contains("creating"));
}

#[test]
fn test_render_validation_error() {
    let mut view = FormView::new();
    view.handle_key(ctrl_s());

    let backend = TestBackend::new(120, FORM_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), false, false))
        .unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Please fill in: project, lifecycle"));
}
