use crate::event::{date_key, Event, EventId, EventPatch};
use time::Date;

/// Something the calendar asks the application to do in response to user
/// interaction
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Effect {
    SelectDate(Date),
    OpenEvent(EventId),
    /// Reschedule an event onto a new date, leaving every other field as is
    Move { id: EventId, new_date: Date },
}

impl Effect {
    /// The request body that persists a `Move`
    pub(crate) fn patch(&self) -> Option<(&EventId, EventPatch)> {
        match self {
            Effect::Move { id, new_date } => Some((id, EventPatch::reschedule(*new_date))),
            _ => None,
        }
    }
}

/// Decide what dropping `event` onto the cell for `target` does.  Dropping an
/// event onto the day it is already on does nothing.
pub(crate) fn drop_event(event: &Event, target: Date) -> Option<Effect> {
    (event.event_date != target).then(|| Effect::Move {
        id: event.id.clone(),
        new_date: target,
    })
}

/// An event picked up in the month view and waiting to be dropped
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Held {
    pub(crate) event: Event,
}

impl Held {
    pub(crate) fn new(event: Event) -> Held {
        Held { event }
    }

    pub(crate) fn drop_on(self, target: Date) -> Option<Effect> {
        drop_event(&self.event, target)
    }

    pub(crate) fn describe(&self, target: Date) -> String {
        format!("Moving \"{}\" to {}", self.event.title, date_key(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::testing::event;
    use time::macros::date;

    #[test]
    fn test_drop_on_same_day_is_noop() {
        let ev = event("42", "Dentist", "2026-10-19", "09:00", "10:00");
        assert_eq!(drop_event(&ev, date!(2026 - 10 - 19)), None);
    }

    #[test]
    fn test_drop_on_other_day_moves() {
        let ev = event("42", "Dentist", "2026-10-19", "09:00", "10:00");
        let effect = drop_event(&ev, date!(2026 - 10 - 23)).unwrap();
        assert_eq!(
            effect,
            Effect::Move {
                id: EventId::new("42"),
                new_date: date!(2026 - 10 - 23),
            }
        );
        let (id, patch) = effect.patch().unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"event_date":"2026-10-23"}"#
        );
    }

    #[test]
    fn test_only_moves_have_patches() {
        assert_eq!(Effect::SelectDate(date!(2026 - 10 - 19)).patch(), None);
        assert_eq!(Effect::OpenEvent(EventId::new("1")).patch(), None);
    }

    #[test]
    fn test_held_event() {
        let held = Held::new(event("7", "Gym", "2026-10-19", "18:00", "19:00"));
        assert_eq!(
            held.describe(date!(2026 - 10 - 20)),
            "Moving \"Gym\" to 2026-10-20"
        );
        assert_eq!(held.clone().drop_on(date!(2026 - 10 - 19)), None);
        assert!(held.drop_on(date!(2026 - 10 - 20)).is_some());
    }
}
