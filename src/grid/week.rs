use super::projection::WEEK_MIN_EVENT_HEIGHT;
use super::timeline::DayColumn;
use super::util::{week_of, OutOfTimeError, DAYS_IN_WEEK};
use crate::event::Event;
use time::Date;

/// Seven Sunday-to-Saturday day columns around a reference date
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct WeekGrid<'a> {
    columns: Vec<DayColumn<'a>>,
}

impl<'a> WeekGrid<'a> {
    pub(crate) fn new(
        reference: Date,
        today: Date,
        selected: Option<Date>,
        events: &'a [Event],
    ) -> Result<WeekGrid<'a>, OutOfTimeError> {
        let columns = week_of(reference)?
            .into_iter()
            .map(|date| DayColumn::new(date, today, selected, events, WEEK_MIN_EVENT_HEIGHT))
            .collect::<Vec<_>>();
        debug_assert_eq!(columns.len(), DAYS_IN_WEEK, "a week should have seven days");
        Ok(WeekGrid { columns })
    }

    pub(crate) fn columns(&self) -> &[DayColumn<'a>] {
        &self.columns
    }

    pub(crate) fn first_day(&self) -> Date {
        self.columns[0].date
    }

    pub(crate) fn last_day(&self) -> Date {
        self.columns[DAYS_IN_WEEK - 1].date
    }

    /// "Oct 2026" when the week lies within one month, else "Sep - Oct 2026"
    pub(crate) fn title(&self) -> String {
        let start = self.first_day();
        let end = self.last_day();
        if start.month() == end.month() {
            format!("{} {}", short_month(start), start.year())
        } else {
            format!("{} - {} {}", short_month(start), short_month(end), end.year())
        }
    }
}

fn short_month(date: Date) -> String {
    date.month().to_string().chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::testing::event;
    use time::macros::date;
    use time::Weekday;

    #[test]
    fn test_sunday_through_saturday() {
        for reference in [
            date!(2026 - 10 - 18),
            date!(2026 - 10 - 19),
            date!(2026 - 10 - 21),
            date!(2026 - 10 - 24),
        ] {
            let grid = WeekGrid::new(reference, reference, None, &[]).unwrap();
            assert_eq!(grid.columns().len(), 7);
            assert_eq!(grid.first_day(), date!(2026 - 10 - 18));
            assert_eq!(grid.last_day(), date!(2026 - 10 - 24));
            assert_eq!(grid.first_day().weekday(), Weekday::Sunday);
            assert_eq!(grid.last_day().weekday(), Weekday::Saturday);
            assert!(
                grid.columns()
                    .windows(2)
                    .all(|w| w[0].date.next_day() == Some(w[1].date)),
                "week days should be consecutive"
            );
        }
    }

    #[test]
    fn test_title() {
        let grid = WeekGrid::new(date!(2026 - 10 - 19), date!(2026 - 10 - 19), None, &[]).unwrap();
        assert_eq!(grid.title(), "Oct 2026");
        let grid = WeekGrid::new(date!(2026 - 09 - 30), date!(2026 - 10 - 19), None, &[]).unwrap();
        assert_eq!(grid.title(), "Sep - Oct 2026");
        let grid = WeekGrid::new(date!(2026 - 12 - 31), date!(2026 - 10 - 19), None, &[]).unwrap();
        assert_eq!(grid.title(), "Dec - Jan 2027");
    }

    #[test]
    fn test_events_go_to_their_column() {
        let events = vec![
            event("1", "Mon", "2026-10-19", "09:00", "10:00"),
            event("2", "Fri", "2026-10-23", "14:00", "14:10"),
            event("3", "Next week", "2026-10-26", "09:00", "10:00"),
        ];
        let grid = WeekGrid::new(
            date!(2026 - 10 - 21),
            date!(2026 - 10 - 19),
            None,
            &events,
        )
        .unwrap();
        let counts = grid
            .columns()
            .iter()
            .map(|c| c.events.len())
            .collect::<Vec<_>>();
        assert_eq!(counts, [0, 1, 0, 0, 0, 1, 0]);
        assert!(grid.columns()[1].is_today);
        let friday = &grid.columns()[5].events[0];
        assert_eq!(friday.placement.height, WEEK_MIN_EVENT_HEIGHT);
    }
}
