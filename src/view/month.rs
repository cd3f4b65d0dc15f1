use super::canvas::{BufferCanvas, ACS_HLINE};
use crate::grid::{DayCell, MonthGrid, DAYS_IN_WEEK};
use crate::theme::{
    BASE_STYLE, DROP_TARGET_STYLE, EVENT_STYLE, FOCUSED_EVENT_STYLE, HEADER_STYLE,
    OVERFLOW_STYLE, SELECTED_STYLE, TODAY_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::iter::zip;

static WEEKDAY_NAMES: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of lines taken up by the header and its rule
const HEADER_LINES: u16 = 2;

/// A month laid out as a grid of day cells, each listing the titles of its
/// first few events
#[derive(Clone, Copy, Debug)]
pub(crate) struct MonthView<'a> {
    grid: &'a MonthGrid<'a>,
    /// Index of the focused event within the selected day
    focus: Option<usize>,
    /// Whether an event is being carried to the selected day
    moving: bool,
}

impl<'a> MonthView<'a> {
    pub(crate) fn new(grid: &'a MonthGrid<'a>) -> Self {
        MonthView {
            grid,
            focus: None,
            moving: false,
        }
    }

    pub(crate) fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }

    pub(crate) fn moving(mut self, moving: bool) -> Self {
        self.moving = moving;
        self
    }

    fn draw_day(
        &self,
        canvas: &mut BufferCanvas<'_>,
        y: u16,
        x: u16,
        width: u16,
        height: u16,
        day: &DayCell<'_>,
    ) {
        let cell_style = match (day.is_selected, self.moving) {
            (true, true) => DROP_TARGET_STYLE,
            (true, false) => SELECTED_STYLE,
            (false, _) => BASE_STYLE,
        };
        if day.is_selected {
            canvas.fill(y, x, width, height, cell_style);
        }
        let right = x + width;
        if day.is_today {
            canvas.mvprint_within(
                y,
                x,
                right,
                format!("[{:>2}]", day.date.day()),
                cell_style.patch(TODAY_STYLE),
            );
        } else {
            canvas.mvprint_within(y, x, right, format!(" {:>2} ", day.date.day()), cell_style);
        }
        let lines = usize::from(height.saturating_sub(1));
        let preview = day.preview();
        let (shown, more) = if preview.len() + usize::from(day.overflow() > 0) <= lines {
            (preview.len(), day.overflow())
        } else {
            let shown = lines.saturating_sub(1);
            (shown, day.events.len() - shown)
        };
        let text_width = usize::from(width.saturating_sub(1));
        for (i, (line, ev)) in zip(1u16.., preview.iter().take(shown)).enumerate() {
            let style = if day.is_selected && self.focus == Some(i) {
                FOCUSED_EVENT_STYLE
            } else {
                EVENT_STYLE
            };
            canvas.mvprint_within(
                y + line,
                x + 1,
                right,
                format!("{:<text_width$}", ev.title),
                style,
            );
        }
        if more > 0 && lines > 0 {
            let line = u16::try_from(shown).unwrap_or(u16::MAX).saturating_add(1);
            canvas.mvprint_within(
                y + line,
                x + 1,
                right,
                format!("+{more} more"),
                cell_style.patch(OVERFLOW_STYLE),
            );
        }
    }
}

impl Widget for MonthView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = BufferCanvas::new(area, buf);
        let col_width = canvas.width() / 7;
        if col_width < 2 {
            return;
        }
        for (c, name) in zip(0u16.., WEEKDAY_NAMES) {
            canvas.mvprint(0, c * col_width + 1, name, HEADER_STYLE);
        }
        canvas.hline(1, 0, ACS_HLINE, col_width * 7, HEADER_STYLE);
        let row_qty = u16::try_from(self.grid.row_qty()).unwrap_or(u16::MAX).max(1);
        let row_height = (canvas.height().saturating_sub(HEADER_LINES) / row_qty).max(1);
        for (pos, day) in zip(self.grid.leading_placeholders().., self.grid.days()) {
            let r = u16::try_from(pos / DAYS_IN_WEEK).unwrap_or(u16::MAX);
            let c = u16::try_from(pos % DAYS_IN_WEEK).unwrap_or(u16::MAX);
            let y = HEADER_LINES.saturating_add(r.saturating_mul(row_height));
            self.draw_day(&mut canvas, y, c * col_width, col_width - 1, row_height, day);
        }
    }
}
