use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

static KEYS: &[(&str, &str)] = &[
    ("h, LEFT", "Select previous day"),
    ("l, RIGHT", "Select next day"),
    ("k, UP", "Select same day last week"),
    ("j, DOWN", "Select same day next week"),
    ("[, PAGE UP", "Show previous month/week/day"),
    ("], PAGE DOWN", "Show next month/week/day"),
    ("M, W, D", "Switch to month, week, or day view"),
    ("0, HOME", "Jump to today"),
    ("g", "Input date to jump to"),
    ("n", "New event on selected day"),
    ("TAB", "Focus next event on selected day"),
    ("e, ENTER", "Edit focused event"),
    ("x", "Delete focused event"),
    ("m", "Move focused event (month view)"),
    ("r", "Reload events"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

const KEY_WIDTH: usize = 16;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    fn to_text(self) -> Text<'static> {
        let key_style = self.0.add_modifier(Modifier::BOLD);
        let mut lines = KEYS
            .iter()
            .map(|&(keys, action)| {
                Line::from_iter([
                    Span::styled(format!("{keys:<KEY_WIDTH$}"), key_style),
                    Span::styled(action, self.0),
                ])
            })
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.to_text();
        // Two columns of border plus one of padding on each side
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let [outer_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [outer_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::horizontal(1)),
            )
            .style(self.0)
            .render(outer_area, buf);
    }
}
