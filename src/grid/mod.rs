//! Projection of a flat event list onto month, week, and day grids
mod day;
mod month;
mod projection;
mod timeline;
mod util;
mod week;
pub(crate) use self::day::DayGrid;
pub(crate) use self::month::{DayCell, MonthGrid};
pub(crate) use self::projection::HOURS_IN_DAY;
pub(crate) use self::timeline::DayColumn;
pub(crate) use self::util::{
    add_days, days_in_month, events_on, OutOfTimeError, WeekdayExt, DAYS_IN_WEEK,
};
pub(crate) use self::week::WeekGrid;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::Date;

/// Which calendar view is active
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum Granularity {
    #[default]
    Month,
    Week,
    Day,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Month => write!(f, "month"),
            Granularity::Week => write!(f, "week"),
            Granularity::Day => write!(f, "day"),
        }
    }
}

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Granularity, ParseGranularityError> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(Granularity::Month),
            "week" => Ok(Granularity::Week),
            "day" => Ok(Granularity::Day),
            _ => Err(ParseGranularityError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid view {0:?}; expected \"month\", \"week\", or \"day\"")]
pub(crate) struct ParseGranularityError(String);

/// Whether `date` is the given current local date
pub(crate) fn is_today(date: Date, today: Date) -> bool {
    date == today
}
