use super::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Authentication state handed to the API client.  A token is set on login
/// and cleared on logout.
#[derive(Clone, Default, Eq, PartialEq)]
pub(crate) struct Session {
    token: Option<String>,
}

#[derive(Deserialize, Serialize)]
struct SessionFile {
    token: String,
}

impl Session {
    pub(crate) fn new() -> Session {
        Session::default()
    }

    pub(crate) fn with_token<S: Into<String>>(token: S) -> Session {
        Session {
            token: Some(token.into()),
        }
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
    }

    /// Load a saved session.  A missing file is an unauthenticated session.
    pub(crate) fn load(path: &Path) -> Result<Session, SessionError> {
        let src = match fs::read_to_string(path) {
            Ok(src) => src,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Session::new()),
            Err(source) => {
                return Err(SessionError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        let file = serde_json::from_str::<SessionFile>(&src).map_err(|source| {
            SessionError::Parse {
                path: path.to_owned(),
                source,
            }
        })?;
        Ok(Session::with_token(file.token))
    }

    /// Persist the session to `path`, or remove the file if the session is
    /// not authenticated
    pub(crate) fn save(&self, path: &Path) -> Result<(), SessionError> {
        let write_err = |source| SessionError::Write {
            path: path.to_owned(),
            source,
        };
        match &self.token {
            Some(token) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(write_err)?;
                }
                let src = serde_json::to_string(&SessionFile {
                    token: token.clone(),
                })
                .map_err(|source| SessionError::Parse {
                    path: path.to_owned(),
                    source,
                })?;
                fs::write(path, src).map_err(write_err)
            }
            None => match fs::remove_file(path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(write_err(e)),
                _ => Ok(()),
            },
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
