//! Rendering for TableView

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::model::{CommitRecord, Notification, SortDirection, SortField};
use crate::ui::{components, theme};
use crate::view_model::PageView;

use super::{InputMode, TableContext, TableView, empty_text};

/// Column widths, in `SortField::ALL` order
const WIDTHS: [Constraint; 8] = [
    Constraint::Length(12),
    Constraint::Length(11),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Min(24),
    Constraint::Fill(1),
    Constraint::Length(12),
    Constraint::Length(12),
];

/// Height of the description editor
const DESCRIPTION_EDITOR_HEIGHT: u16 = 6;

impl TableView {
    /// Render the view with optional notification in title bar
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        page: &PageView<'_>,
        ctx: &TableContext<'_>,
        notification: Option<&Notification>,
    ) {
        let (table_area, input_area) = match self.input_mode {
            InputMode::Normal => (area, None),
            InputMode::Search | InputMode::EditHeader => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
            InputMode::EditDescription => {
                let chunks = Layout::vertical([
                    Constraint::Min(1),
                    Constraint::Length(DESCRIPTION_EDITOR_HEIGHT),
                ])
                .split(area);
                (chunks[0], Some(chunks[1]))
            }
        };

        self.render_table(frame, table_area, page, ctx, notification);

        if let Some(input_area) = input_area {
            if self.input_mode == InputMode::EditDescription {
                self.render_description_editor(frame, input_area);
            } else {
                self.render_input_bar(frame, input_area);
            }
        }
    }

    fn render_table(
        &self,
        frame: &mut Frame,
        area: Rect,
        page: &PageView<'_>,
        ctx: &TableContext<'_>,
        notification: Option<&Notification>,
    ) {
        let mut title = build_title(ctx);

        // Notification goes after the title, truncated to what is left
        let available_for_notif = area.width.saturating_sub(title.width() as u16 + 4) as usize;
        if let Some(notif_line) = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, available_for_notif))
            .filter(|line| !line.spans.is_empty())
        {
            title.spans.extend(notif_line.spans);
        }

        let mut block = components::focus_block(title, ctx.focused, theme::table::FOCUSED_BORDER)
            .title_bottom(build_summary(page, ctx.search));
        if let Some(pagination) = build_pagination(page) {
            block = block.title_bottom(pagination);
        }

        if page.rows.is_empty() {
            render_empty_state(frame, area, block, ctx);
            return;
        }

        let rows: Vec<Row> = page
            .rows
            .iter()
            .map(|record| build_row(record, ctx))
            .collect();

        let table = Table::new(rows, WIDTHS)
            .header(build_header(ctx))
            .block(block)
            .row_highlight_style(
                Style::default()
                    .fg(theme::selection::FG)
                    .bg(theme::selection::BG)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = TableState::default();
        if ctx.focused {
            state.select(Some(self.selected.min(page.rows.len() - 1)));
        }
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let Some((prompt, title)) = self.input_mode.input_bar_meta() else {
            return;
        };

        let input_text = format!("{}{}", prompt, self.input_buffer);

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Show the end of long input (UTF-8 safe)
        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", input_text.chars().skip(skip).collect::<String>())
        } else {
            input_text
        };

        let paragraph =
            Paragraph::new(display_text).block(components::bordered_block(Line::from(title)));
        frame.render_widget(paragraph, area);

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }

    fn render_description_editor(&self, frame: &mut Frame, area: Rect) {
        let Some(ref textarea) = self.textarea else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::table::FOCUSED_BORDER))
            .title(" E Edit description (Ctrl+S save, Esc cancel) ");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(textarea, inner);
    }
}

fn build_title(ctx: &TableContext<'_>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " Commit History ",
        Style::default()
            .fg(theme::table::TITLE)
            .add_modifier(Modifier::BOLD),
    )];

    if !ctx.search.is_empty() {
        spans.push(Span::raw(format!("[Search: {}] ", ctx.search)));
    }
    if ctx.showing_fallback {
        spans.push(Span::styled(
            "[demo data] ",
            Style::default().fg(theme::table::DEMO_MARKER),
        ));
    }
    if ctx.loading {
        spans.push(Span::styled(
            "[loading…] ",
            Style::default().fg(theme::table::LOADING),
        ));
    }

    Line::from(spans)
}

/// Sort indicator for a column header
pub(crate) fn sort_icon(ctx: &TableContext<'_>, field: SortField) -> &'static str {
    if ctx.sort.field != field {
        return "↕";
    }
    match ctx.sort.direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

fn build_header(ctx: &TableContext<'_>) -> Row<'static> {
    let cells = SortField::ALL.iter().map(|&field| {
        let style = if ctx.sort.field == field {
            Style::default()
                .fg(theme::table::SORTED_HEADER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::table::HEADER)
        };
        Cell::from(format!("{} {}", field.label(), sort_icon(ctx, field))).style(style)
    });
    Row::new(cells)
}

fn build_row(record: &CommitRecord, ctx: &TableContext<'_>) -> Row<'static> {
    let description = record
        .description
        .as_deref()
        .and_then(|d| d.lines().next())
        .unwrap_or("");

    let cells = vec![
        Cell::from(record.project.clone()).style(Style::default().fg(theme::table::PROJECT)),
        Cell::from(record.lifecycle.clone()),
        Cell::from(record.action.clone()),
        Cell::from(record.commit_type.clone()).style(Style::default().fg(theme::table::TYPE)),
        Cell::from(record.header.clone()),
        Cell::from(description.to_string()),
        Cell::from(display_date(record.created_at.as_deref()))
            .style(Style::default().fg(theme::table::TIMESTAMP)),
        Cell::from(display_date(record.updated_at.as_deref()))
            .style(Style::default().fg(theme::table::TIMESTAMP)),
    ];

    let row = Row::new(cells);
    let is_deleting = record.id.is_some() && record.id.as_ref() == ctx.deleting;
    let is_updating = record.id.is_some() && record.id.as_ref() == ctx.updating;
    if is_deleting {
        row.style(
            Style::default()
                .fg(theme::table::DELETING)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else if is_updating {
        row.style(
            Style::default()
                .fg(theme::table::UPDATING)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        row
    }
}

/// Date part of an ISO-8601 timestamp, "-" when absent
pub(crate) fn display_date(timestamp: Option<&str>) -> String {
    match timestamp {
        None | Some("") => "-".to_string(),
        Some(ts) => match ts.split_once('T') {
            Some((date, _)) => date.to_string(),
            None => ts.to_string(),
        },
    }
}

/// "Found n commits matching "term"" (empty when nothing matched)
pub(crate) fn summary_text(matched: usize, search: &str) -> String {
    if matched == 0 {
        return String::new();
    }
    let noun = if matched == 1 { "commit" } else { "commits" };
    if search.is_empty() {
        format!(" Found {matched} {noun} ")
    } else {
        format!(" Found {matched} {noun} matching \"{search}\" ")
    }
}

fn build_summary(page: &PageView<'_>, search: &str) -> Line<'static> {
    Line::from(summary_text(page.matched, search)).fg(theme::table::SUMMARY)
}

/// "Showing a to b of n commits · Page x/y", only when there is more than one page
pub(crate) fn pagination_text(page: &PageView<'_>) -> Option<String> {
    if page.total_pages <= 1 {
        return None;
    }
    let position = format!("Page {}/{}", page.page, page.total_pages);
    Some(match page.shown_range() {
        Some((from, to)) => format!(
            " Showing {from} to {to} of {} commits · {position} ",
            page.matched
        ),
        None => format!(" {position} "),
    })
}

fn build_pagination(page: &PageView<'_>) -> Option<Line<'static>> {
    pagination_text(page).map(|text| {
        Line::from(text)
            .fg(theme::table::SUMMARY)
            .alignment(Alignment::Right)
    })
}

fn render_empty_state(frame: &mut Frame, area: Rect, block: Block<'_>, ctx: &TableContext<'_>) {
    let mut lines = vec![Line::from("")];
    if ctx.loading {
        lines.push(Line::from(empty_text::LOADING).fg(theme::table::LOADING));
    } else {
        lines.push(Line::from(empty_text::TITLE).fg(theme::table::TIMESTAMP));
        if !ctx.search.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(empty_text::SEARCH_HINT).fg(theme::table::TIMESTAMP));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
