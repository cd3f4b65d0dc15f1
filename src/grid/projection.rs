use time::Time;

pub(crate) const HOURS_IN_DAY: u8 = 24;

const MINUTES_IN_HOUR: u32 = 60;

/// Vertical units occupied by one hour of a timed view
pub(crate) const HOUR_ROW_HEIGHT: u32 = 60;

/// Smallest height an event block is drawn with in the day view
pub(crate) const DAY_MIN_EVENT_HEIGHT: u32 = 40;

/// Smallest height an event block is drawn with in the week view
pub(crate) const WEEK_MIN_EVENT_HEIGHT: u32 = 30;

/// Where an event sits on a vertical time axis
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Placement {
    pub(crate) start_minutes: u32,
    /// End minus start; zero or negative when the event's end is not after
    /// its start
    pub(crate) duration_minutes: i32,
    pub(crate) top: u32,
    pub(crate) height: u32,
}

impl Placement {
    pub(crate) fn is_inverted(&self) -> bool {
        self.duration_minutes <= 0
    }

    pub(crate) fn start_hour(&self) -> u32 {
        self.start_minutes / MINUTES_IN_HOUR
    }
}

pub(crate) fn minutes_of_day(t: Time) -> u16 {
    u16::from(t.hour()) * 60 + u16::from(t.minute())
}

/// Project an event's start and end onto an axis where each hour is
/// `hour_row_height` units tall.  Heights never drop below `min_height`,
/// including for events whose end is not after their start.
pub(crate) fn project(start: Time, end: Time, hour_row_height: u32, min_height: u32) -> Placement {
    let start_minutes = minutes_of_day(start);
    let duration_minutes = i32::from(minutes_of_day(end)) - i32::from(start_minutes);
    let start_minutes = u32::from(start_minutes);
    let top = start_minutes * hour_row_height / MINUTES_IN_HOUR;
    let height = match u32::try_from(duration_minutes) {
        Ok(d) => (d * hour_row_height / MINUTES_IN_HOUR).max(min_height),
        Err(_) => min_height,
    };
    Placement {
        start_minutes,
        duration_minutes,
        top,
        height,
    }
}

/// "12 AM", "1 AM", …, "12 PM", "1 PM", …, "11 PM"
pub(crate) fn hour_label(hour: u8) -> String {
    match hour {
        0 => String::from("12 AM"),
        12 => String::from("12 PM"),
        1..=11 => format!("{hour} AM"),
        _ => format!("{} PM", hour - 12),
    }
}
