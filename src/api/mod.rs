//! Client for the events service
mod client;
mod error;
mod session;
pub(crate) use self::client::ApiClient;
pub(crate) use self::error::ApiError;
pub(crate) use self::session::Session;
