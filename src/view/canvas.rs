use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Paragraph, Widget},
};

pub(super) const ACS_HLINE: char = '─';

/// Drawing surface addressed relative to the top-left corner of `area`.
/// Anything drawn outside of `area` is clipped.
#[derive(Debug, Eq, PartialEq)]
pub(super) struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    pub(super) fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    pub(super) fn width(&self) -> u16 {
        self.area.width
    }

    pub(super) fn height(&self) -> u16 {
        self.area.height
    }

    pub(super) fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        self.mvprint_within(y, x, self.area.width, s, style);
    }

    /// Like `mvprint()`, but truncate the text at column `right`
    pub(super) fn mvprint_within<S: AsRef<str>>(
        &mut self,
        y: u16,
        x: u16,
        right: u16,
        s: S,
        style: Style,
    ) {
        let right = right.min(self.area.width);
        if y < self.area.height && x < right {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // area, though we need to be sure that the Rect passed to the
            // Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (right - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    pub(super) fn hline(&mut self, y: u16, x: u16, ch: char, length: u16, style: Style) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), style);
    }

    pub(super) fn fill(&mut self, y: u16, x: u16, width: u16, height: u16, style: Style) {
        if y < self.area.height && x < self.area.width {
            let rect = Rect {
                x: x + self.area.x,
                y: y + self.area.y,
                width: width.min(self.area.width - x),
                height: height.min(self.area.height - y),
            };
            self.buf.set_style(rect, style);
        }
    }
}
