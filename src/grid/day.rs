use super::projection::DAY_MIN_EVENT_HEIGHT;
use super::timeline::DayColumn;
use crate::event::Event;
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DayGrid<'a> {
    pub(crate) column: DayColumn<'a>,
}

impl<'a> DayGrid<'a> {
    /// Lay out the selected date, or today if nothing is selected
    pub(crate) fn new(today: Date, selected: Option<Date>, events: &'a [Event]) -> DayGrid<'a> {
        let date = selected.unwrap_or(today);
        DayGrid {
            column: DayColumn::new(date, today, selected, events, DAY_MIN_EVENT_HEIGHT),
        }
    }

    pub(crate) fn date(&self) -> Date {
        self.column.date
    }

    /// "Monday, October 19, 2026"
    pub(crate) fn title(&self) -> String {
        let date = self.date();
        format!(
            "{}, {} {}, {}",
            date.weekday(),
            date.month(),
            date.day(),
            date.year()
        )
    }
}
