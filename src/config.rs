use reqwest::Url;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8000";

const API_URL_VAR: &str = "CALBOARD_API_URL";
const SESSION_FILE_VAR: &str = "CALBOARD_SESSION_FILE";
const LOG_DIR_VAR: &str = "CALBOARD_LOG_DIR";

/// Runtime settings, assembled from built-in defaults overridden by the
/// environment and then by command-line options
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    pub(crate) api_url: String,
    pub(crate) session_file: PathBuf,
    /// Directory to write log files to; logging is off when unset
    pub(crate) log_dir: Option<PathBuf>,
}

impl Config {
    pub(crate) fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| std::env::var_os(name), dirs::config_dir)
    }

    fn from_lookup<F, D>(lookup: F, config_dir: D) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
        D: FnOnce() -> Option<PathBuf>,
    {
        let api_url = match lookup(API_URL_VAR) {
            Some(value) => {
                let value = value.into_string().map_err(|_| ConfigError::NotUnicode {
                    var: API_URL_VAR,
                })?;
                check_api_url(&value)?
            }
            None => String::from(DEFAULT_API_URL),
        };
        let session_file = match lookup(SESSION_FILE_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("calboard")
                .join("session.json"),
        };
        let log_dir = lookup(LOG_DIR_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Ok(Config {
            api_url,
            session_file,
            log_dir,
        })
    }

    pub(crate) fn with_api_url(mut self, url: Option<String>) -> Result<Config, ConfigError> {
        if let Some(url) = url {
            self.api_url = check_api_url(&url)?;
        }
        Ok(self)
    }
}

fn check_api_url(s: &str) -> Result<String, ConfigError> {
    match Url::parse(s) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(s.trim_end_matches('/').to_owned())
        }
        _ => Err(ConfigError::InvalidApiUrl(s.to_owned())),
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[error("could not determine configuration directory; set {SESSION_FILE_VAR}")]
    NoConfigDir,
    #[error("invalid API URL {0:?}; expected an http or https URL")]
    InvalidApiUrl(String),
    #[error("{var} is not valid UTF-8")]
    NotUnicode { var: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<OsString> + 'a {
        let vars = vars.iter().copied().collect::<HashMap<_, _>>();
        move |name| vars.get(name).map(OsString::from)
    }

    fn config_dir() -> Option<PathBuf> {
        Some(PathBuf::from("/home/me/.config"))
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup(&[]), config_dir).unwrap();
        assert_eq!(
            cfg,
            Config {
                api_url: String::from("http://localhost:8000"),
                session_file: PathBuf::from("/home/me/.config/calboard/session.json"),
                log_dir: None,
            }
        );
    }

    #[test]
    fn test_environment_overrides() {
        let cfg = Config::from_lookup(
            lookup(&[
                ("CALBOARD_API_URL", "https://cal.example.com/"),
                ("CALBOARD_SESSION_FILE", "/tmp/s.json"),
                ("CALBOARD_LOG_DIR", "/var/log/calboard"),
            ]),
            || None,
        )
        .unwrap();
        assert_eq!(cfg.api_url, "https://cal.example.com");
        assert_eq!(cfg.session_file, Path::new("/tmp/s.json"));
        assert_eq!(cfg.log_dir.as_deref(), Some(Path::new("/var/log/calboard")));
    }

    #[test]
    fn test_cli_overrides_environment() {
        let cfg = Config::from_lookup(
            lookup(&[("CALBOARD_API_URL", "https://cal.example.com")]),
            config_dir,
        )
        .unwrap()
        .with_api_url(Some(String::from("http://127.0.0.1:9000")))
        .unwrap();
        assert_eq!(cfg.api_url, "http://127.0.0.1:9000");
        let cfg = cfg.with_api_url(None).unwrap();
        assert_eq!(cfg.api_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_bad_api_url() {
        let r = Config::from_lookup(lookup(&[("CALBOARD_API_URL", "localhost:8000")]), config_dir);
        assert_eq!(
            r,
            Err(ConfigError::InvalidApiUrl(String::from("localhost:8000")))
        );
        let r = Config::from_lookup(lookup(&[("CALBOARD_API_URL", "ftp://example.com")]), config_dir);
        assert!(r.is_err());
    }

    #[test]
    fn test_no_config_dir() {
        let r = Config::from_lookup(lookup(&[]), || None);
        assert_eq!(r, Err(ConfigError::NoConfigDir));
        assert_eq!(
            r.unwrap_err().to_string(),
            "could not determine configuration directory; set CALBOARD_SESSION_FILE"
        );
    }
}
