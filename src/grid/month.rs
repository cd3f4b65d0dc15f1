use super::is_today;
use super::util::{days_in_month, events_on, first_of_month, iter_days_from, WeekdayExt, DAYS_IN_WEEK};
use crate::event::Event;
use time::{Date, Month};

/// Number of event titles shown in a month cell before collapsing the rest
/// into a "+N more" marker
pub(crate) const PREVIEW_LEN: usize = 3;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DayCell<'a> {
    pub(crate) date: Date,
    pub(crate) is_today: bool,
    pub(crate) is_selected: bool,
    pub(crate) events: Vec<&'a Event>,
}

impl<'a> DayCell<'a> {
    pub(crate) fn new(
        date: Date,
        today: Date,
        selected: Option<Date>,
        events: &'a [Event],
    ) -> DayCell<'a> {
        DayCell {
            date,
            is_today: is_today(date, today),
            is_selected: selected == Some(date),
            events: events_on(events, date),
        }
    }

    pub(crate) fn preview(&self) -> &[&'a Event] {
        &self.events[..self.events.len().min(PREVIEW_LEN)]
    }

    /// Number of events not included in `preview()`
    pub(crate) fn overflow(&self) -> usize {
        self.events.len().saturating_sub(PREVIEW_LEN)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum MonthCell<'a> {
    /// Padding before the first or after the last day of the month
    Placeholder,
    Day(DayCell<'a>),
}

impl<'a> MonthCell<'a> {
    pub(crate) fn day(&self) -> Option<&DayCell<'a>> {
        match self {
            MonthCell::Placeholder => None,
            MonthCell::Day(cell) => Some(cell),
        }
    }
}

/// The cells of a month laid out in Sunday-first week rows
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid<'a> {
    pub(crate) year: i32,
    pub(crate) month: Month,
    cells: Vec<MonthCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    pub(crate) fn new(
        reference: Date,
        today: Date,
        selected: Option<Date>,
        events: &'a [Event],
    ) -> MonthGrid<'a> {
        let year = reference.year();
        let month = reference.month();
        let first = first_of_month(reference);
        let leading = usize::from(first.weekday().index0());
        let day_qty = usize::from(days_in_month(year, month));
        let mut cells = Vec::with_capacity((leading + day_qty).next_multiple_of(DAYS_IN_WEEK));
        cells.resize(leading, MonthCell::Placeholder);
        cells.extend(
            iter_days_from(first)
                .take(day_qty)
                .map(|date| MonthCell::Day(DayCell::new(date, today, selected, events))),
        );
        cells.resize(cells.len().next_multiple_of(DAYS_IN_WEEK), MonthCell::Placeholder);
        MonthGrid { year, month, cells }
    }

    pub(crate) fn row_qty(&self) -> usize {
        self.cells.len() / DAYS_IN_WEEK
    }

    /// Number of placeholder cells before the first of the month, equal to
    /// that day's Sunday-based weekday index
    pub(crate) fn leading_placeholders(&self) -> usize {
        self.cells
            .iter()
            .take_while(|c| matches!(c, MonthCell::Placeholder))
            .count()
    }

    pub(crate) fn days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter_map(MonthCell::day)
    }

    /// "October 2026"
    pub(crate) fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}
