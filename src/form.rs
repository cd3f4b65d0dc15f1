use crate::event::{
    date_key, parse_date, parse_time, time_label, Event, EventId, EventPatch, NewEvent,
    NotifyBefore, ParseError,
};
use thiserror::Error;
use time::Date;

const DEFAULT_START: &str = "09:00";
const DEFAULT_END: &str = "10:00";

/// The editable fields of an event as the user typed them
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct EventDraft {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) date: String,
    pub(crate) start: String,
    pub(crate) end: String,
    pub(crate) notify_before: NotifyBefore,
    /// Set when the draft edits an existing event
    pub(crate) id: Option<EventId>,
}

impl EventDraft {
    pub(crate) fn for_date(date: Date) -> EventDraft {
        EventDraft {
            title: String::new(),
            description: String::new(),
            date: date_key(date),
            start: String::from(DEFAULT_START),
            end: String::from(DEFAULT_END),
            notify_before: NotifyBefore::default(),
            id: None,
        }
    }

    pub(crate) fn for_event(event: &Event) -> EventDraft {
        EventDraft {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: date_key(event.event_date),
            start: time_label(event.start_time),
            end: time_label(event.end_time),
            notify_before: event.notify_before,
            id: Some(event.id.clone()),
        }
    }

    pub(crate) fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn validate(&self) -> Result<NewEvent, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let event_date = parse_date(&self.date)?;
        let start_time = parse_time(&self.start)?;
        let end_time = parse_time(&self.end)?;
        if start_time >= end_time {
            return Err(FormError::EndNotAfterStart);
        }
        let description = Some(self.description.trim())
            .filter(|s| !s.is_empty())
            .map(String::from);
        Ok(NewEvent {
            title: title.to_owned(),
            description,
            event_date,
            start_time,
            end_time,
            notify_before: self.notify_before,
        })
    }

    /// Validate the draft and turn it into the request it should be
    /// submitted as
    pub(crate) fn submit(&self) -> Result<Submission, FormError> {
        let new = self.validate()?;
        Ok(match &self.id {
            Some(id) => Submission::Update(
                id.clone(),
                EventPatch {
                    title: Some(new.title),
                    description: Some(new.description.unwrap_or_default()),
                    event_date: Some(new.event_date),
                    start_time: Some(new.start_time),
                    end_time: Some(new.end_time),
                    notify_before: Some(new.notify_before),
                },
            ),
            None => Submission::Create(new),
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Submission {
    Create(NewEvent),
    Update(EventId, EventPatch),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("End time must be after start time")]
    EndNotAfterStart,
    #[error(transparent)]
    Parse(#[from] ParseError),
}
