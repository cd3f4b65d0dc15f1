use super::projection::{hour_label, project, Placement, HOURS_IN_DAY, HOUR_ROW_HEIGHT};
use super::is_today;
use super::util::events_on;
use crate::event::Event;
use time::Date;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TimedEvent<'a> {
    pub(crate) event: &'a Event,
    pub(crate) placement: Placement,
}

impl TimedEvent<'_> {
    /// Re-project onto an axis with a different hour height, such as a
    /// number of terminal rows per hour
    pub(crate) fn rescale(&self, hour_row_height: u32, min_height: u32) -> Placement {
        project(
            self.event.start_time,
            self.event.end_time,
            hour_row_height,
            min_height,
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HourSlot<'a> {
    pub(crate) hour: u8,
    /// Events starting within this hour
    pub(crate) events: Vec<TimedEvent<'a>>,
}

impl HourSlot<'_> {
    pub(crate) fn label(&self) -> String {
        hour_label(self.hour)
    }
}

/// One day's worth of events positioned on a vertical time axis
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DayColumn<'a> {
    pub(crate) date: Date,
    pub(crate) is_today: bool,
    pub(crate) is_selected: bool,
    pub(crate) events: Vec<TimedEvent<'a>>,
}

impl<'a> DayColumn<'a> {
    pub(crate) fn new(
        date: Date,
        today: Date,
        selected: Option<Date>,
        events: &'a [Event],
        min_event_height: u32,
    ) -> DayColumn<'a> {
        let events = events_on(events, date)
            .into_iter()
            .map(|event| TimedEvent {
                event,
                placement: project(
                    event.start_time,
                    event.end_time,
                    HOUR_ROW_HEIGHT,
                    min_event_height,
                ),
            })
            .collect();
        DayColumn {
            date,
            is_today: is_today(date, today),
            is_selected: selected == Some(date),
            events,
        }
    }

    /// The 24 hour slots of the day, each holding the events that start in it
    pub(crate) fn slots(&self) -> Vec<HourSlot<'a>> {
        (0..HOURS_IN_DAY)
            .map(|hour| HourSlot {
                hour,
                events: self
                    .events
                    .iter()
                    .filter(|te| te.placement.start_hour() == u32::from(hour))
                    .copied()
                    .collect(),
            })
            .collect()
    }
}
