use super::error::ApiError;
use super::session::Session;
use crate::event::{date_key, Event, EventId, EventPatch, NewEvent};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::{Date, Month};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const MIN_PASSWORD_LEN: usize = 6;

// The service hashes passwords with bcrypt, which only considers the first 72
// bytes
const MAX_PASSWORD_LEN: usize = 72;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) email: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct Token {
    access_token: String,
}

/// Blocking client for the events service
#[derive(Debug)]
pub(crate) struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub(crate) fn new(base_url: &str, session: Session) -> Result<ApiClient, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Client)?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
        })
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, req: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.session.token().ok_or(ApiError::Unauthenticated)?;
        Ok(req.bearer_auth(token))
    }

    fn get<T: DeserializeOwned>(&self, path: &str, failure: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let req = self.authorized(self.http.get(&url))?;
        self.send(req, url, failure)
    }

    fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        url: String,
        body: &B,
        failure: &str,
    ) -> Result<T, ApiError> {
        self.send(req.json(body), url, failure)
    }

    fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        url: String,
        failure: &str,
    ) -> Result<T, ApiError> {
        let body = self.execute(req, &url, failure)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// Send a request and return the body of a successful response
    fn execute(&self, req: RequestBuilder, url: &str, failure: &str) -> Result<String, ApiError> {
        let resp = req.send().map_err(|source| ApiError::Transport {
            url: url.to_owned(),
            source,
        })?;
        let status = resp.status();
        let body = resp.text().map_err(|source| ApiError::Transport {
            url: url.to_owned(),
            source,
        })?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!(%url, %status, "request failed");
            Err(ApiError::Status {
                status,
                message: error_message(&body, failure),
            })
        }
    }

    pub(crate) fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        check_password(password)?;
        let url = self.url("/auth/register");
        tracing::info!(%email, "registering");
        self.send_json(
            self.http.post(&url),
            url,
            &Credentials { email, password },
            "Registration failed",
        )
    }

    /// Log in and store the returned token in the client's session
    pub(crate) fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let url = self.url("/auth/login");
        tracing::info!(%email, "logging in");
        let token: Token = self.send_json(
            self.http.post(&url),
            url,
            &Credentials { email, password },
            "Login failed",
        )?;
        self.session.set_token(token.access_token);
        Ok(())
    }

    pub(crate) fn logout(&mut self) {
        self.session.clear();
    }

    pub(crate) fn list_all(&self) -> Result<Vec<Event>, ApiError> {
        self.get("/events", "Failed to fetch events")
    }

    pub(crate) fn list_by_date(&self, date: Date) -> Result<Vec<Event>, ApiError> {
        self.get(&date_path(date), "Failed to fetch events")
    }

    pub(crate) fn list_by_month(&self, year: i32, month: Month) -> Result<Vec<Event>, ApiError> {
        self.get(&month_path(year, month), "Failed to fetch events")
    }

    pub(crate) fn list_today(&self) -> Result<Vec<Event>, ApiError> {
        self.get("/events/today", "Failed to fetch events")
    }

    pub(crate) fn list_upcoming(&self) -> Result<Vec<Event>, ApiError> {
        self.get("/events/upcoming", "Failed to fetch events")
    }

    pub(crate) fn fetch(&self, id: &EventId) -> Result<Event, ApiError> {
        self.get(&event_path(id), "Failed to fetch event")
    }

    pub(crate) fn create(&self, event: &NewEvent) -> Result<Event, ApiError> {
        let url = self.url("/events");
        tracing::info!(title = %event.title, date = %date_key(event.event_date), "creating event");
        let req = self.authorized(self.http.post(&url))?;
        self.send_json(req, url, event, "Failed to create event")
    }

    pub(crate) fn update(&self, id: &EventId, patch: &EventPatch) -> Result<Event, ApiError> {
        if patch.is_empty() {
            return self.fetch(id);
        }
        let url = self.url(&event_path(id));
        tracing::info!(%id, "updating event");
        let req = self.authorized(self.http.put(&url))?;
        self.send_json(req, url, patch, "Failed to update event")
    }

    pub(crate) fn delete(&self, id: &EventId) -> Result<(), ApiError> {
        let url = self.url(&event_path(id));
        tracing::info!(%id, "deleting event");
        let req = self.authorized(self.http.delete(&url))?;
        self.execute(req, &url, "Failed to delete event")?;
        Ok(())
    }
}

fn check_password(password: &str) -> Result<(), ApiError> {
    if password.len() < MIN_PASSWORD_LEN {
        Err(ApiError::Invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )))
    } else if password.len() > MAX_PASSWORD_LEN {
        Err(ApiError::Invalid(format!(
            "Password must be {MAX_PASSWORD_LEN} characters or less"
        )))
    } else {
        Ok(())
    }
}

fn date_path(date: Date) -> String {
    format!("/events/date/{}", date_key(date))
}

fn month_path(year: i32, month: Month) -> String {
    format!("/events/month/{year}/{}", u8::from(month))
}

fn event_path(id: &EventId) -> String {
    format!("/events/{id}")
}

/// Extract the service's explanation from an error response body, falling
/// back to `failure` if there is none
fn error_message(body: &str, failure: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Detail,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Detail {
        Message(String),
        // Request validation errors come back as a list of problems
        Problems(Vec<Problem>),
    }

    #[derive(Deserialize)]
    struct Problem {
        msg: String,
    }

    match serde_json::from_str::<ErrorBody>(body).map(|eb| eb.detail) {
        Ok(Detail::Message(msg)) if !msg.is_empty() => msg,
        Ok(Detail::Problems(problems)) if !problems.is_empty() => problems
            .into_iter()
            .map(|p| p.msg)
            .collect::<Vec<_>>()
            .join("; "),
        _ => failure.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_paths() {
        assert_eq!(date_path(date!(2026 - 03 - 07)), "/events/date/2026-03-07");
        assert_eq!(month_path(2026, Month::March), "/events/month/2026/3");
        assert_eq!(event_path(&EventId::new("abc-123")), "/events/abc-123");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/", Session::new()).unwrap();
        assert_eq!(client.url("/events"), "http://localhost:8000/events");
    }

    #[test]
    fn test_requests_need_a_session() {
        let client = ApiClient::new("http://localhost:8000", Session::new()).unwrap();
        assert!(matches!(client.list_all(), Err(ApiError::Unauthenticated)));
        assert!(matches!(
            client.delete(&EventId::new("1")),
            Err(ApiError::Unauthenticated)
        ));
    }

    #[test]
    fn test_credentials_sent_as_json() {
        let client = ApiClient::new("http://localhost:8000", Session::new()).unwrap();
        let req = client
            .http
            .post(client.url("/auth/login"))
            .json(&Credentials {
                email: "me@example.com",
                password: "hunter22",
            })
            .build()
            .unwrap();
        assert_eq!(
            req.headers()[reqwest::header::CONTENT_TYPE],
            "application/json"
        );
        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(body).unwrap(),
            serde_json::json!({"email": "me@example.com", "password": "hunter22"})
        );
    }

    #[test]
    fn test_logout_clears_session() {
        let mut client = ApiClient::new("http://localhost:8000", Session::with_token("t")).unwrap();
        assert!(client.session().is_authenticated());
        client.logout();
        assert!(!client.session().is_authenticated());
    }

    #[test]
    fn test_register_checks_password_length() {
        let client = ApiClient::new("http://localhost:8000", Session::new()).unwrap();
        let err = client.register("me@example.com", "short").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
        let err = client
            .register("me@example.com", &"x".repeat(73))
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be 72 characters or less");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"detail": "Email already registered"}"#, "Registration failed"),
            "Email already registered"
        );
        assert_eq!(
            error_message(
                r#"{"detail": [{"loc": ["body", "event_date"], "msg": "invalid date format", "type": "value_error"}]}"#,
                "Failed to create event"
            ),
            "invalid date format"
        );
        assert_eq!(
            error_message("Internal Server Error", "Failed to fetch events"),
            "Failed to fetch events"
        );
        assert_eq!(error_message(r#"{"detail": ""}"#, "Login failed"), "Login failed");
    }
}
