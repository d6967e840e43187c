//! Keybinding definitions for commit-deck
//!
//! All keybindings live here so views and the help panel agree.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Ctrl+C / Ctrl+Q quit from anywhere
pub fn is_force_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('q') | KeyCode::Char('Q')
        )
}

/// Ctrl+L reloads the table
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
}

/// Ctrl+S submits the form
pub fn is_submit_form(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
}

// =============================================================================
// Global keys
// =============================================================================

pub const QUIT: KeyCode = KeyCode::Char('q');
pub const HELP: KeyCode = KeyCode::Char('?');
/// Switch focus between form and table
pub const TAB: KeyCode = KeyCode::Tab;
pub const BACK_TAB: KeyCode = KeyCode::BackTab;
pub const ESC: KeyCode = KeyCode::Esc;
/// Dismiss the error banner
pub const DISMISS_ERROR: KeyCode = KeyCode::Char('x');

// =============================================================================
// Navigation keys
// =============================================================================

pub const MOVE_UP: KeyCode = KeyCode::Char('k');
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;
pub const GO_TOP: KeyCode = KeyCode::Char('g');
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');
pub const NEXT_PAGE: KeyCode = KeyCode::Char('n');
pub const NEXT_PAGE_ARROW: KeyCode = KeyCode::Right;
pub const PREV_PAGE: KeyCode = KeyCode::Char('p');
pub const PREV_PAGE_ARROW: KeyCode = KeyCode::Left;

pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

pub fn is_next_page(code: KeyCode) -> bool {
    matches!(code, NEXT_PAGE | NEXT_PAGE_ARROW)
}

pub fn is_prev_page(code: KeyCode) -> bool {
    matches!(code, PREV_PAGE | PREV_PAGE_ARROW)
}

// =============================================================================
// Input keys
// =============================================================================

pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Table keys
// =============================================================================

pub const SEARCH_INPUT: KeyCode = KeyCode::Char('/');
pub const RELOAD: KeyCode = KeyCode::Char('r');
pub const DELETE: KeyCode = KeyCode::Char('d');
pub const EDIT_HEADER: KeyCode = KeyCode::Char('e');
pub const EDIT_DESCRIPTION: KeyCode = KeyCode::Char('E');

// =============================================================================
// Key hints (status bar)
// =============================================================================

/// A key hint for the status bar
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

const fn hint(key: &'static str, label: &'static str, color: Color) -> KeyHint {
    KeyHint { key, label, color }
}

pub const TABLE_HINTS: &[KeyHint] = &[
    hint("Tab", "Form", Color::Cyan),
    hint("/", "Search", Color::Yellow),
    hint("1-8", "Sort", Color::Yellow),
    hint("n/p", "Page", Color::Blue),
    hint("e", "Edit", Color::Green),
    hint("d", "Delete", Color::Red),
    hint("r", "Reload", Color::Magenta),
    hint("?", "Help", Color::Cyan),
    hint("q", "Quit", Color::Gray),
];

pub const TABLE_INPUT_HINTS: &[KeyHint] = &[
    hint("Enter", "Apply", Color::Green),
    hint("Esc", "Cancel", Color::Red),
];

pub const FORM_HINTS: &[KeyHint] = &[
    hint("Tab", "Table", Color::Cyan),
    hint("↑/↓", "Field", Color::Blue),
    hint("←/→", "Option", Color::Blue),
    hint("Enter", "Pick/Create", Color::Green),
    hint("^S", "Generate", Color::Magenta),
    hint("Esc", "Back", Color::Gray),
];

pub const DIALOG_HINTS: &[KeyHint] = &[
    hint("y", "Yes", Color::Green),
    hint("n", "No", Color::Red),
];

// =============================================================================
// Help panel entries
// =============================================================================

pub const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("Tab", "Switch focus between form and table"),
    ("?", "Show this help"),
    ("x", "Dismiss error banner"),
    ("Ctrl+L", "Reload commits"),
    ("q", "Quit (table) / close help"),
    ("Ctrl+C", "Quit from anywhere"),
];

pub const TABLE_KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓", "Move selection"),
    ("g/G", "First/last row on page"),
    ("n/p →/←", "Next/previous page"),
    ("/", "Search (live filter)"),
    ("1-8", "Sort by column (again to flip)"),
    ("e", "Edit header"),
    ("E", "Edit description"),
    ("d", "Delete commit"),
    ("r", "Reload"),
];

pub const FORM_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "Previous/next field"),
    ("type", "Filter options or name a new one"),
    ("←/→", "Cycle matching options"),
    ("Enter", "Pick option, or create it when nothing matches"),
    ("Enter", "Generate (in description)"),
    ("Ctrl+S", "Generate commit from any field"),
    ("Esc", "Clear filter / back to table"),
];

pub const SORT_KEYS: &[(&str, &str)] = &[
    ("1", "Project"),
    ("2", "Lifecycle"),
    ("3", "Action"),
    ("4", "Type"),
    ("5", "Header"),
    ("6", "Description"),
    ("7", "Created"),
    ("8", "Updated"),
];
