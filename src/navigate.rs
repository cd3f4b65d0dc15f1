use crate::grid::{add_days, days_in_month, Granularity, OutOfTimeError, WeekdayExt};
use time::{Date, Month};

/// Move `date` by `delta` months, clamping the day of the month to the length
/// of the target month
pub(crate) fn add_months(date: Date, delta: i32) -> Result<Date, OutOfTimeError> {
    let month0 = i32::from(u8::from(date.month())) - 1 + delta;
    let year = date
        .year()
        .checked_add(month0.div_euclid(12))
        .ok_or(OutOfTimeError)?;
    let month = u8::try_from(month0.rem_euclid(12) + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(OutOfTimeError)?;
    let day = date.day().min(days_in_month(year, month));
    Date::from_calendar_date(year, month, day).map_err(|_| OutOfTimeError)
}

/// Step `date` one period of `granularity` forwards or backwards
pub(crate) fn step(date: Date, granularity: Granularity, forwards: bool) -> Result<Date, OutOfTimeError> {
    let sign = if forwards { 1 } else { -1 };
    match granularity {
        Granularity::Day => add_days(date, i64::from(sign)),
        Granularity::Week => add_days(date, 7 * i64::from(sign)),
        Granularity::Month => add_months(date, sign),
    }
}

/// The navigation state of the calendar: what period is shown and which day
/// is selected.  The displayed grid is recomputed from this on every draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ViewState {
    pub(crate) today: Date,
    pub(crate) reference: Date,
    pub(crate) granularity: Granularity,
    pub(crate) selected: Option<Date>,
}

impl ViewState {
    pub(crate) fn new(today: Date, granularity: Granularity) -> ViewState {
        ViewState {
            today,
            reference: today,
            granularity,
            selected: Some(today),
        }
    }

    pub(crate) fn start_date(mut self, date: Date) -> ViewState {
        self.reference = date;
        self.selected = Some(date);
        self
    }

    /// The selected date, falling back to the reference date
    pub(crate) fn cursor(&self) -> Date {
        self.selected.unwrap_or(self.reference)
    }

    pub(crate) fn forwards(&mut self) -> Result<(), OutOfTimeError> {
        self.go(true)
    }

    pub(crate) fn backwards(&mut self) -> Result<(), OutOfTimeError> {
        self.go(false)
    }

    fn go(&mut self, forwards: bool) -> Result<(), OutOfTimeError> {
        let date = step(self.reference, self.granularity, forwards)?;
        self.reference = date;
        self.selected = Some(date);
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.jump_to_date(self.today);
    }

    pub(crate) fn jump_to_date(&mut self, date: Date) {
        self.reference = date;
        self.selected = Some(date);
    }

    pub(crate) fn set_granularity(&mut self, granularity: Granularity) {
        self.granularity = granularity;
        self.reference = self.cursor();
    }

    /// Select `date`; the displayed period follows the selection when it
    /// leaves the period
    pub(crate) fn select(&mut self, date: Date) {
        self.selected = Some(date);
        if !self.shows(date) {
            self.reference = date;
        }
    }

    pub(crate) fn move_selection(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        let date = add_days(self.cursor(), days)?;
        self.select(date);
        Ok(())
    }

    /// Whether `date` lies in the currently displayed period
    pub(crate) fn shows(&self, date: Date) -> bool {
        match self.granularity {
            Granularity::Month => {
                date.year() == self.reference.year() && date.month() == self.reference.month()
            }
            Granularity::Week => {
                let offset = (date - self.reference).whole_days()
                    + i64::from(self.reference.weekday().index0());
                (0..7).contains(&offset)
            }
            Granularity::Day => date == self.reference,
        }
    }
}
