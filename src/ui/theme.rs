//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the commit table
pub mod table {
    use super::*;

    pub const TITLE: Color = Color::Cyan;
    pub const FOCUSED_BORDER: Color = Color::Cyan;
    pub const HEADER: Color = Color::Cyan;
    /// Column currently sorted on
    pub const SORTED_HEADER: Color = Color::Yellow;
    pub const PROJECT: Color = Color::Magenta;
    pub const TYPE: Color = Color::Green;
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Row whose delete is in flight
    pub const DELETING: Color = Color::DarkGray;
    /// Row whose update is in flight
    pub const UPDATING: Color = Color::Yellow;
    pub const DEMO_MARKER: Color = Color::Yellow;
    pub const LOADING: Color = Color::Magenta;
    pub const SUMMARY: Color = Color::DarkGray;
}

/// Colors for the commit form
pub mod form {
    use super::*;

    pub const TITLE: Color = Color::Cyan;
    pub const FOCUSED_BORDER: Color = Color::Yellow;
    pub const PROJECT_LABEL: Color = Color::Yellow;
    pub const LIFECYCLE_LABEL: Color = Color::Magenta;
    pub const ACTION_LABEL: Color = Color::Blue;
    pub const TYPE_LABEL: Color = Color::Green;
    pub const PLACEHOLDER: Color = Color::DarkGray;
    pub const CREATE_HINT: Color = Color::Cyan;
    pub const PREVIEW: Color = Color::Green;
}

/// Row selection
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}
