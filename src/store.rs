use crate::api::{ApiClient, ApiError};
use crate::event::{Event, EventId, EventPatch, NewEvent};
use crate::reschedule::Effect;

/// Where the store gets its events from
pub(crate) trait EventSource {
    fn list_all(&self) -> Result<Vec<Event>, ApiError>;
    fn list_today(&self) -> Result<Vec<Event>, ApiError>;
    fn list_upcoming(&self) -> Result<Vec<Event>, ApiError>;
    fn create(&self, event: &NewEvent) -> Result<Event, ApiError>;
    fn update(&self, id: &EventId, patch: &EventPatch) -> Result<Event, ApiError>;
    fn delete(&self, id: &EventId) -> Result<(), ApiError>;
}

impl EventSource for ApiClient {
    fn list_all(&self) -> Result<Vec<Event>, ApiError> {
        ApiClient::list_all(self)
    }

    fn list_today(&self) -> Result<Vec<Event>, ApiError> {
        ApiClient::list_today(self)
    }

    fn list_upcoming(&self) -> Result<Vec<Event>, ApiError> {
        ApiClient::list_upcoming(self)
    }

    fn create(&self, event: &NewEvent) -> Result<Event, ApiError> {
        ApiClient::create(self, event)
    }

    fn update(&self, id: &EventId, patch: &EventPatch) -> Result<Event, ApiError> {
        ApiClient::update(self, id, patch)
    }

    fn delete(&self, id: &EventId) -> Result<(), ApiError> {
        ApiClient::delete(self, id)
    }
}

/// Client-side cache of the user's events.  Successful mutations are applied
/// to the cached list directly instead of refetching it.
#[derive(Clone, Debug)]
pub(crate) struct EventStore<S> {
    source: S,
    events: Vec<Event>,
    today: Vec<Event>,
    upcoming: Vec<Event>,
    error: Option<String>,
}

impl<S: EventSource> EventStore<S> {
    pub(crate) fn new(source: S) -> EventStore<S> {
        EventStore {
            source,
            events: Vec::new(),
            today: Vec::new(),
            upcoming: Vec::new(),
            error: None,
        }
    }

    pub(crate) fn events(&self) -> &[Event] {
        &self.events
    }

    pub(crate) fn today(&self) -> &[Event] {
        &self.today
    }

    pub(crate) fn upcoming(&self) -> &[Event] {
        &self.upcoming
    }

    /// The message of the most recent failed operation, if the last
    /// operation failed
    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    pub(crate) fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|ev| &ev.id == id)
    }

    /// Refetch every event along with the today and upcoming lists
    pub(crate) fn refresh(&mut self) -> Result<(), ApiError> {
        let events = self.track(S::list_all)?;
        tracing::debug!(qty = events.len(), "fetched events");
        self.events = events;
        self.refresh_side_lists();
        Ok(())
    }

    pub(crate) fn create(&mut self, event: &NewEvent) -> Result<&Event, ApiError> {
        let created = self.track(|src| src.create(event))?;
        self.events.push(created);
        self.refresh_side_lists();
        let i = self.events.len() - 1;
        Ok(&self.events[i])
    }

    pub(crate) fn update(&mut self, id: &EventId, patch: &EventPatch) -> Result<&Event, ApiError> {
        let updated = self.track(|src| src.update(id, patch))?;
        let i = match self.events.iter().position(|ev| &ev.id == id) {
            Some(i) => {
                self.events[i] = updated;
                i
            }
            None => {
                self.events.push(updated);
                self.events.len() - 1
            }
        };
        self.refresh_side_lists();
        Ok(&self.events[i])
    }

    pub(crate) fn delete(&mut self, id: &EventId) -> Result<(), ApiError> {
        self.track(|src| src.delete(id))?;
        self.events.retain(|ev| &ev.id != id);
        self.refresh_side_lists();
        Ok(())
    }

    /// Persist the effect if it changes an event.  Effects that only concern
    /// the UI are ignored.
    pub(crate) fn apply(&mut self, effect: &Effect) -> Result<(), ApiError> {
        if let Some((id, patch)) = effect.patch() {
            tracing::info!(%id, "rescheduling event");
            self.update(id, &patch)?;
        }
        Ok(())
    }

    fn track<T, F>(&mut self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&S) -> Result<T, ApiError>,
    {
        match op(&self.source) {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(error = %e, "event operation failed");
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn refresh_side_lists(&mut self) {
        match self.source.list_today() {
            Ok(today) => self.today = today,
            Err(e) => tracing::warn!(error = %e, "failed to fetch today's events"),
        }
        match self.source.list_upcoming() {
            Ok(upcoming) => self.upcoming = upcoming,
            Err(e) => tracing::warn!(error = %e, "failed to fetch upcoming events"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeSource;
    use super::*;
    use crate::event::testing::event;
    use crate::event::NotifyBefore;
    use time::macros::{date, time};

    fn titles(events: &[Event]) -> Vec<&str> {
        events.iter().map(|ev| ev.title.as_str()).collect()
    }

    fn sample() -> FakeSource {
        let mut src = FakeSource::with_events(vec![
            event("1", "Standup", "2026-10-19", "09:00", "09:15"),
            event("2", "Gym", "2026-10-19", "18:00", "19:00"),
            event("3", "Dinner", "2026-10-24", "19:00", "21:00"),
            event("4", "Taxes", "2026-11-02", "10:00", "11:00"),
        ]);
        src.today = Some(date!(2026 - 10 - 19));
        src
    }

    #[test]
    fn test_refresh() {
        let mut store = EventStore::new(sample());
        store.refresh().unwrap();
        assert_eq!(titles(store.events()), ["Standup", "Gym", "Dinner", "Taxes"]);
        assert_eq!(titles(store.today()), ["Standup", "Gym"]);
        assert_eq!(titles(store.upcoming()), ["Dinner", "Taxes"]);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_failed_refresh_keeps_events_and_records_error() {
        let mut store = EventStore::new(sample());
        store.refresh().unwrap();
        store.source.fail.set(true);
        let err = store.refresh().unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch events");
        assert_eq!(store.error(), Some("Failed to fetch events"));
        assert_eq!(store.events().len(), 4);
    }

    #[test]
    fn test_side_list_failures_are_not_fatal() {
        let mut store = EventStore::new(sample());
        store.source.fail_side_lists.set(true);
        store.refresh().unwrap();
        assert_eq!(store.events().len(), 4);
        assert!(store.today().is_empty());
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_create_appends() {
        let mut store = EventStore::new(sample());
        store.refresh().unwrap();
        let new = NewEvent {
            title: String::from("Lunch"),
            description: None,
            event_date: date!(2026 - 10 - 19),
            start_time: time!(12:00),
            end_time: time!(13:00),
            notify_before: NotifyBefore::Thirty,
        };
        let created = store.create(&new).unwrap();
        assert_eq!(created.id.as_str(), "new-1");
        assert_eq!(
            titles(store.events()),
            ["Standup", "Gym", "Dinner", "Taxes", "Lunch"]
        );
        assert_eq!(titles(store.today()), ["Standup", "Gym", "Lunch"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = EventStore::new(sample());
        store.refresh().unwrap();
        let patch = EventPatch {
            title: Some(String::from("Leg day")),
            ..EventPatch::default()
        };
        store.update(&EventId::new("2"), &patch).unwrap();
        assert_eq!(titles(store.events()), ["Standup", "Leg day", "Dinner", "Taxes"]);
    }

    #[test]
    fn test_delete_removes() {
        let mut store = EventStore::new(sample());
        store.refresh().unwrap();
        store.delete(&EventId::new("1")).unwrap();
        assert_eq!(titles(store.events()), ["Gym", "Dinner", "Taxes"]);
        assert_eq!(titles(store.today()), ["Gym"]);
    }

    #[test]
    fn test_failed_mutation_leaves_cache_alone() {
        let mut store = EventStore::new(sample());
        store.refresh().unwrap();
        store.source.fail.set(true);
        assert!(store.delete(&EventId::new("1")).is_err());
        assert_eq!(store.events().len(), 4);
        assert_eq!(store.error(), Some("Failed to delete event"));
    }

    #[test]
    fn test_apply_move() {
        let mut store = EventStore::new(sample());
        store.refresh().unwrap();
        let effect = Effect::Move {
            id: EventId::new("3"),
            new_date: date!(2026 - 10 - 19),
        };
        store.apply(&effect).unwrap();
        let moved = store.get(&EventId::new("3")).unwrap();
        assert_eq!(moved.event_date, date!(2026 - 10 - 19));
        assert_eq!(moved.start_time, time!(19:00));
        assert_eq!(titles(store.today()), ["Standup", "Gym", "Dinner"]);
        store
            .apply(&Effect::SelectDate(date!(2026 - 10 - 20)))
            .unwrap();
        assert_eq!(store.events().len(), 4);
    }
}
