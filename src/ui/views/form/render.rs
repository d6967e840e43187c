//! Rendering for FormView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{components, theme};

use super::{FormField, FormView, Selector};

/// Rows the form needs: selectors, description, preview, borders
pub const FORM_HEIGHT: u16 = 9;

const PLACEHOLDER: &str = "...";
const DESCRIPTION_PLACEHOLDER: &str = "Give a short description...";

impl FormView {
    /// Render the form. `creating` shows the in-flight marker.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, creating: bool) {
        let title = Line::from(Span::styled(
            " Commit Message Generator ",
            Style::default()
                .fg(theme::form::TITLE)
                .add_modifier(Modifier::BOLD),
        ));
        let block = components::focus_block(title, focused, theme::form::FOCUSED_BORDER);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [selectors_area, description_area, preview_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(selectors_area);
        let fields = [
            (FormField::Project, theme::form::PROJECT_LABEL),
            (FormField::Lifecycle, theme::form::LIFECYCLE_LABEL),
            (FormField::Action, theme::form::ACTION_LABEL),
            (FormField::Type, theme::form::TYPE_LABEL),
        ];
        for ((field, color), column) in fields.into_iter().zip(columns.iter()) {
            if let Some(selector) = self.selector(field) {
                let field_focused = focused && self.focused == field;
                render_selector(frame, *column, selector, color, field_focused);
            }
        }

        self.render_description(frame, description_area, focused);
        frame.render_widget(self.build_status_line(creating), preview_area);
    }

    fn render_description(&self, frame: &mut Frame, area: Rect, form_focused: bool) {
        let focused = form_focused && self.focused == FormField::Description;
        let block = field_block("Description", Color::White, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.description_text().is_empty() && !focused {
            frame.render_widget(
                Paragraph::new(DESCRIPTION_PLACEHOLDER)
                    .style(Style::default().fg(theme::form::PLACEHOLDER)),
                inner,
            );
        } else {
            frame.render_widget(&self.description, inner);
        }
    }

    /// Preview of the composed header, or the refusal message
    pub(crate) fn build_status_line(&self, creating: bool) -> Line<'static> {
        if let Some(ref error) = self.validation_error {
            return Line::from(vec![
                Span::styled(" ! ", Style::default().fg(Color::White).bg(Color::Red)),
                Span::styled(format!(" {error}"), Style::default().fg(Color::Red)),
            ]);
        }

        let mut spans = vec![
            Span::raw(" → "),
            Span::styled(
                self.preview_header(),
                Style::default().fg(theme::form::PREVIEW),
            ),
        ];
        if creating {
            spans.push(Span::styled(
                "  creating…",
                Style::default().fg(Color::Magenta),
            ));
        }
        Line::from(spans)
    }
}

fn field_block(label: &str, color: Color, focused: bool) -> Block<'static> {
    let title = Span::styled(
        format!(" {label} "),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(theme::form::FOCUSED_BORDER))
    } else {
        block
    }
}

fn render_selector(frame: &mut Frame, area: Rect, selector: &Selector, color: Color, focused: bool) {
    let block = field_block(selector.label, color, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(selector_line(selector, focused)), inner);
}

/// What a selector shows inside its box
pub(crate) fn selector_line(selector: &Selector, focused: bool) -> Line<'static> {
    if !focused {
        return match selector.selected_label() {
            Some(label) => Line::from(label.to_string()),
            None => Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(theme::form::PLACEHOLDER),
            )),
        };
    }

    if selector.would_create() {
        return Line::from(vec![
            Span::styled("+ ", Style::default().fg(theme::form::CREATE_HINT)),
            Span::styled(
                format!("Create \"{}\"", selector.query().trim()),
                Style::default().fg(theme::form::CREATE_HINT),
            ),
        ]);
    }

    let mut spans = Vec::new();
    if !selector.query().is_empty() {
        spans.push(Span::styled(
            format!("/{} ", selector.query()),
            Style::default().fg(Color::Yellow),
        ));
    }
    match selector.candidate() {
        Some(option) => {
            let is_selected = selector.value() == Some(option.value.as_str());
            let mark = if is_selected { "✓ " } else { "" };
            spans.push(Span::styled(
                format!("‹ {mark}{} ›", option.label),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        None => spans.push(Span::styled(
            "type to add",
            Style::default().fg(theme::form::PLACEHOLDER),
        )),
    }
    Line::from(spans)
}
