use crate::event::Event;
use std::iter::successors;
use thiserror::Error;
use time::{Date, Duration, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    /// Column index of the weekday in a Sunday-first week
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

pub(crate) fn first_of_month(date: Date) -> Date {
    date.replace_day(1)
        .expect("every month should have a first day")
}

pub(crate) fn add_days(date: Date, n: i64) -> Result<Date, OutOfTimeError> {
    date.checked_add(Duration::days(n)).ok_or(OutOfTimeError)
}

/// Returns the Sunday on or before `date`
pub(crate) fn week_start(date: Date) -> Result<Date, OutOfTimeError> {
    add_days(date, -i64::from(date.weekday().index0()))
}

/// Returns the seven dates of the Sunday-to-Saturday week containing `date`
pub(crate) fn week_of(date: Date) -> Result<[Date; DAYS_IN_WEEK], OutOfTimeError> {
    let sunday = week_start(date)?;
    let mut days = [sunday; DAYS_IN_WEEK];
    for (slot, d) in days.iter_mut().zip(iter_days_from(sunday)) {
        *slot = d;
    }
    if days[DAYS_IN_WEEK - 1].weekday() == Weekday::Saturday {
        Ok(days)
    } else {
        // The week runs off the end of the representable calendar
        Err(OutOfTimeError)
    }
}

pub(crate) fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}

/// Returns the events dated `date`, in the order they appear in `events`
pub(crate) fn events_on(events: &[Event], date: Date) -> Vec<&Event> {
    events.iter().filter(|ev| ev.occurs_on(date)).collect()
}
