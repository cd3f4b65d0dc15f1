use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const HEADER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE
    .fg(Color::LightCyan)
    .add_modifier(Modifier::BOLD);

pub(crate) const PLACEHOLDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

/// Patched onto the style of today's date label
pub(crate) const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub(crate) const DROP_TARGET_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightMagenta);

pub(crate) const EVENT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightBlue);

pub(crate) const FOCUSED_EVENT_STYLE: Style = EVENT_STYLE.add_modifier(Modifier::REVERSED);

/// Events whose end is not after their start
pub(crate) const INVERTED_EVENT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightRed);

pub(crate) const OVERFLOW_STYLE: Style = Style::new()
    .fg(Color::Gray)
    .add_modifier(Modifier::ITALIC);

pub(crate) const HOUR_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

pub(crate) const ERROR_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}

pub(crate) mod editor {
    use super::*;

    pub(crate) const LABEL_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const FIELD_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);

    pub(crate) const FOCUSED_FIELD_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightCyan);

    pub(crate) const ERROR_STYLE: Style = BASE_STYLE.fg(Color::LightRed);
}
