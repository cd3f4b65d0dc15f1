use super::canvas::{BufferCanvas, ACS_HLINE};
use crate::grid::{DayColumn, HOURS_IN_DAY};
use crate::theme::{
    DROP_TARGET_STYLE, EVENT_STYLE, FOCUSED_EVENT_STYLE, HEADER_STYLE, HOUR_STYLE,
    INVERTED_EVENT_STYLE, SELECTED_STYLE, TODAY_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::iter::zip;

/// Number of lines taken up by the column headers and their rule
const HEADER_LINES: u16 = 2;

/// Columns reserved on the left for the hour labels
const GUTTER_WIDTH: u16 = 7;

/// Hour shown at the top when the whole day doesn't fit and no event needs an
/// earlier start
const DEFAULT_FIRST_HOUR: u8 = 8;

/// One or more days drawn side by side on a vertical time axis, with each
/// event's block positioned by its start time and sized by its duration
#[derive(Clone, Copy, Debug)]
pub(crate) struct TimelineView<'a> {
    columns: &'a [DayColumn<'a>],
    /// Index of the focused event within the selected day
    focus: Option<usize>,
    /// Whether an event is being carried to the selected day
    moving: bool,
}

impl<'a> TimelineView<'a> {
    pub(crate) fn new(columns: &'a [DayColumn<'a>]) -> Self {
        TimelineView {
            columns,
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

    /// The first hour to show when only `visible` hours fit
    fn first_hour(&self, visible: u8) -> u8 {
        let earliest = self
            .columns
            .iter()
            .flat_map(|col| &col.events)
            .map(|te| te.placement.start_hour())
            .min()
            .and_then(|h| u8::try_from(h).ok())
            .map_or(DEFAULT_FIRST_HOUR, |h| h.min(DEFAULT_FIRST_HOUR));
        earliest.min(HOURS_IN_DAY - visible)
    }

    fn draw_column(
        &self,
        canvas: &mut BufferCanvas<'_>,
        x: u16,
        width: u16,
        hour_rows: u16,
        first_hour: u8,
        column: &DayColumn<'_>,
    ) {
        let header_style = match (column.is_selected, self.moving) {
            (true, true) => DROP_TARGET_STYLE,
            (true, false) => SELECTED_STYLE,
            (false, _) => HEADER_STYLE,
        };
        let header_style = if column.is_today {
            header_style.patch(TODAY_STYLE)
        } else {
            header_style
        };
        canvas.fill(0, x, width, 1, header_style);
        let weekday = column.date.weekday().to_string();
        canvas.mvprint_within(
            0,
            x + 1,
            x + width,
            format!("{} {}", &weekday[..3], column.date.day()),
            header_style,
        );
        let body_rows = u32::from(canvas.height().saturating_sub(HEADER_LINES));
        let offset = u32::from(first_hour) * u32::from(hour_rows);
        let text_width = usize::from(width);
        for (i, te) in column.events.iter().enumerate() {
            let rows = te.rescale(u32::from(hour_rows), 1);
            let bottom = rows.top + rows.height;
            if bottom <= offset || rows.top >= offset + body_rows {
                continue;
            }
            let top = rows.top.saturating_sub(offset);
            let height = (bottom - offset).min(body_rows) - top;
            let style = if column.is_selected && self.focus == Some(i) {
                FOCUSED_EVENT_STYLE
            } else if te.placement.is_inverted() {
                INVERTED_EVENT_STYLE
            } else {
                EVENT_STYLE
            };
            let y = HEADER_LINES + to_u16(top);
            let height = to_u16(height);
            canvas.fill(y, x, width, height, style);
            canvas.mvprint_within(
                y,
                x,
                x + width,
                format!("{:<text_width$}", te.event.title),
                style,
            );
            if height > 1 {
                canvas.mvprint_within(y + 1, x, x + width, te.event.time_range(), style);
            }
        }
    }
}

impl Widget for TimelineView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = BufferCanvas::new(area, buf);
        let col_qty = u16::try_from(self.columns.len()).unwrap_or(u16::MAX);
        if col_qty == 0 {
            return;
        }
        let col_width = canvas.width().saturating_sub(GUTTER_WIDTH) / col_qty;
        if col_width < 2 {
            return;
        }
        canvas.hline(1, 0, ACS_HLINE, GUTTER_WIDTH + col_width * col_qty, HEADER_STYLE);
        let body_rows = canvas.height().saturating_sub(HEADER_LINES);
        let hours = u16::from(HOURS_IN_DAY);
        let hour_rows = (body_rows / hours).max(1);
        let visible = u8::try_from((body_rows / hour_rows).min(hours)).unwrap_or(HOURS_IN_DAY);
        let first_hour = self.first_hour(visible);
        let slots = self.columns[0].slots();
        let shown = usize::from(first_hour)..usize::from(first_hour + visible);
        for (i, slot) in zip(0u16.., &slots[shown]) {
            canvas.mvprint(
                HEADER_LINES + i * hour_rows,
                0,
                format!("{:>5}", slot.label()),
                HOUR_STYLE,
            );
        }
        for (c, column) in zip(0u16.., self.columns) {
            let x = GUTTER_WIDTH + c * col_width;
            self.draw_column(&mut canvas, x, col_width - 1, hour_rows, first_hour, column);
        }
    }
}

fn to_u16(n: u32) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
