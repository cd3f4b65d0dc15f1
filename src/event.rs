use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use time::{macros::format_description, Date, Time};

/// Opaque identifier assigned to an event by the events service
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct EventId(String);

impl EventId {
    pub(crate) fn new<S: Into<String>>(s: S) -> EventId {
        EventId(s.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many minutes before an event's start its reminder fires
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u16", into = "u16")]
pub(crate) enum NotifyBefore {
    Five,
    #[default]
    Ten,
    Thirty,
    Sixty,
}

impl NotifyBefore {
    pub(crate) const ALL: [NotifyBefore; 4] = [
        NotifyBefore::Five,
        NotifyBefore::Ten,
        NotifyBefore::Thirty,
        NotifyBefore::Sixty,
    ];

    pub(crate) fn minutes(self) -> u16 {
        match self {
            NotifyBefore::Five => 5,
            NotifyBefore::Ten => 10,
            NotifyBefore::Thirty => 30,
            NotifyBefore::Sixty => 60,
        }
    }

    pub(crate) fn next(self) -> NotifyBefore {
        match self {
            NotifyBefore::Five => NotifyBefore::Ten,
            NotifyBefore::Ten => NotifyBefore::Thirty,
            NotifyBefore::Thirty => NotifyBefore::Sixty,
            NotifyBefore::Sixty => NotifyBefore::Five,
        }
    }
}

impl From<NotifyBefore> for u16 {
    fn from(value: NotifyBefore) -> u16 {
        value.minutes()
    }
}

impl TryFrom<u16> for NotifyBefore {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<NotifyBefore, ParseError> {
        NotifyBefore::ALL
            .into_iter()
            .find(|nb| nb.minutes() == value)
            .ok_or(ParseError::NotifyBefore(value))
    }
}

impl fmt::Display for NotifyBefore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes before", self.minutes())
    }
}

/// An event as stored by the events service
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct Event {
    pub(crate) id: EventId,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(with = "wire::ymd")]
    pub(crate) event_date: Date,
    #[serde(with = "wire::hms")]
    pub(crate) start_time: Time,
    #[serde(with = "wire::hms")]
    pub(crate) end_time: Time,
    #[serde(default)]
    pub(crate) notify_before: NotifyBefore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) updated_at: Option<String>,
}

impl Event {
    pub(crate) fn occurs_on(&self, date: Date) -> bool {
        self.event_date == date
    }

    /// "09:00 - 10:30"
    pub(crate) fn time_range(&self) -> String {
        format!(
            "{} - {}",
            time_label(self.start_time),
            time_label(self.end_time)
        )
    }
}

/// Request body for creating an event
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct NewEvent {
    pub(crate) title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(with = "wire::ymd")]
    pub(crate) event_date: Date,
    #[serde(with = "wire::hms")]
    pub(crate) start_time: Time,
    #[serde(with = "wire::hms")]
    pub(crate) end_time: Time,
    pub(crate) notify_before: NotifyBefore,
}

/// Request body for updating an event.  Only the fields that are set are sent.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::opt_ymd")]
    pub(crate) event_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::opt_hms")]
    pub(crate) start_time: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wire::opt_hms")]
    pub(crate) end_time: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) notify_before: Option<NotifyBefore>,
}

impl EventPatch {
    pub(crate) fn reschedule(date: Date) -> EventPatch {
        EventPatch {
            event_date: Some(date),
            ..EventPatch::default()
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self == &EventPatch::default()
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ParseError {
    #[error("invalid date {0:?}; expected YYYY-MM-DD")]
    Date(String),
    #[error("invalid time {0:?}; expected HH:MM or HH:MM:SS")]
    Time(String),
    #[error("unsupported reminder offset of {0} minutes; expected 5, 10, 30, or 60")]
    NotifyBefore(u16),
}

/// Format a date as the `YYYY-MM-DD` key used on the wire and for matching
/// events to calendar cells
pub(crate) fn date_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub(crate) fn parse_date(s: &str) -> Result<Date, ParseError> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ParseError::Date(s.to_owned()))
}

/// Parse a time of day given as `HH:MM` or `HH:MM:SS`
pub(crate) fn parse_time(s: &str) -> Result<Time, ParseError> {
    let s = s.trim();
    Time::parse(s, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]")))
        .map_err(|_| ParseError::Time(s.to_owned()))
}

/// "HH:MM"
pub(crate) fn time_label(t: Time) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

fn wire_time(t: Time) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

mod wire {
    pub(super) mod ymd {
        use serde::{de::Error, Deserialize, Deserializer, Serializer};
        use time::Date;

        pub(crate) fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&super::super::date_key(*date))
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
            let s = String::deserialize(deserializer)?;
            super::super::parse_date(&s).map_err(D::Error::custom)
        }
    }

    pub(super) mod hms {
        use serde::{de::Error, Deserialize, Deserializer, Serializer};
        use time::Time;

        pub(crate) fn serialize<S: Serializer>(t: &Time, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&super::super::wire_time(*t))
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
            let s = String::deserialize(deserializer)?;
            super::super::parse_time(&s).map_err(D::Error::custom)
        }
    }

    pub(super) mod opt_ymd {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        pub(crate) fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => super::ymd::serialize(d, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) => super::super::parse_date(&s)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }

    pub(super) mod opt_hms {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Time;

        pub(crate) fn serialize<S: Serializer>(
            t: &Option<Time>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match t {
                Some(t) => super::hms::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Time>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) => super::super::parse_time(&s)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}
