mod api;
mod app;
mod config;
mod editor;
mod event;
mod form;
mod grid;
mod help;
mod jumpto;
mod logging;
mod navigate;
mod reschedule;
mod store;
mod theme;
mod view;
use crate::api::{ApiClient, ApiError, Session};
use crate::app::App;
use crate::config::Config;
use crate::event::{date_key, parse_date, Event, EventId};
use crate::grid::Granularity;
use crate::navigate::ViewState;
use crate::store::EventStore;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use time::{Date, Month, OffsetDateTime};

/// Environment variable consulted for the password before prompting on stdin
const PASSWORD_VAR: &str = "CALBOARD_PASSWORD";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        view: Granularity,
        api_url: Option<String>,
    },
    Login {
        email: String,
        api_url: Option<String>,
    },
    Register {
        email: String,
        api_url: Option<String>,
    },
    Logout,
    List {
        filter: ListFilter,
        api_url: Option<String>,
    },
    Show {
        id: EventId,
        api_url: Option<String>,
    },
    Help,
    Version,
}

/// Which events `calboard list` prints
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ListFilter {
    All,
    Today,
    Upcoming,
    Date(Date),
    Month(i32, Month),
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut view = Granularity::default();
        let mut api_url = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('v') | Arg::Long("view") => view = parser.value()?.parse()?,
                Arg::Long("api-url") => api_url = Some(parser.value()?.string()?),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match value.as_str() {
                        "login" => {
                            let email = parser.value()?.string()?;
                            return Ok(Command::Login { email, api_url });
                        }
                        "register" => {
                            let email = parser.value()?.string()?;
                            return Ok(Command::Register { email, api_url });
                        }
                        "logout" => return Ok(Command::Logout),
                        "list" => return Command::list_from_parser(parser, api_url),
                        "show" => {
                            let id = EventId::new(parser.value()?.string()?);
                            return Ok(Command::Show { id, api_url });
                        }
                        _ => match parse_date(&value) {
                            Ok(d) => date = Some(d),
                            Err(e) => {
                                return Err(lexopt::Error::ParsingFailed {
                                    value,
                                    error: Box::new(e),
                                })
                            }
                        },
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            view,
            api_url,
        })
    }

    fn list_from_parser(
        mut parser: Parser,
        mut api_url: Option<String>,
    ) -> Result<Command, lexopt::Error> {
        let mut filter = ListFilter::All;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Long("today") => filter = ListFilter::Today,
                Arg::Long("upcoming") => filter = ListFilter::Upcoming,
                Arg::Short('d') | Arg::Long("date") => {
                    filter = ListFilter::Date(parser.value()?.parse_with(parse_date)?);
                }
                Arg::Short('m') | Arg::Long("month") => {
                    let (year, month) = parser.value()?.parse_with(parse_month)?;
                    filter = ListFilter::Month(year, month);
                }
                Arg::Long("api-url") => api_url = Some(parser.value()?.string()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::List { filter, api_url })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                view,
                api_url,
            } => {
                let cfg = Config::from_env()?.with_api_url(api_url)?;
                let _guard = logging::init(cfg.log_dir.as_deref());
                let client = connect(&cfg)?;
                if !client.session().is_authenticated() {
                    return Err(ApiError::Unauthenticated.into());
                }
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut state = ViewState::new(today, view);
                if let Some(date) = date {
                    state = state.start_date(date);
                }
                let mut app = App::new(EventStore::new(client), state);
                app.refresh();
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    app.run(&mut terminal)?;
                    Ok(())
                })
            }
            Command::Login { email, api_url } => {
                let cfg = Config::from_env()?.with_api_url(api_url)?;
                let _guard = logging::init(cfg.log_dir.as_deref());
                let mut client = connect(&cfg)?;
                let password = read_password(false)?;
                client.login(&email, &password)?;
                client.session().save(&cfg.session_file)?;
                println!("Logged in as {email}");
                Ok(())
            }
            Command::Register { email, api_url } => {
                let cfg = Config::from_env()?.with_api_url(api_url)?;
                let _guard = logging::init(cfg.log_dir.as_deref());
                let mut client = connect(&cfg)?;
                let password = read_password(true)?;
                let user = client.register(&email, &password)?;
                println!("Registered {} (id {})", user.email, user.id);
                client
                    .login(&email, &password)
                    .context("registered, but failed to log in")?;
                client.session().save(&cfg.session_file)?;
                println!("Logged in as {}", user.email);
                Ok(())
            }
            Command::Logout => {
                let cfg = Config::from_env()?;
                let mut client = connect(&cfg)?;
                client.logout();
                client.session().save(&cfg.session_file)?;
                println!("Logged out");
                Ok(())
            }
            Command::List { filter, api_url } => {
                let cfg = Config::from_env()?.with_api_url(api_url)?;
                let _guard = logging::init(cfg.log_dir.as_deref());
                let client = connect(&cfg)?;
                let events = match filter {
                    ListFilter::All => client.list_all(),
                    ListFilter::Today => client.list_today(),
                    ListFilter::Upcoming => client.list_upcoming(),
                    ListFilter::Date(date) => client.list_by_date(date),
                    ListFilter::Month(year, month) => client.list_by_month(year, month),
                }?;
                let mut out = io::stdout().lock();
                for ev in &events {
                    writeln!(out, "{}", list_line(ev))?;
                }
                if events.is_empty() {
                    writeln!(out, "No events")?;
                }
                Ok(())
            }
            Command::Show { id, api_url } => {
                let cfg = Config::from_env()?.with_api_url(api_url)?;
                let _guard = logging::init(cfg.log_dir.as_deref());
                let client = connect(&cfg)?;
                let ev = client.fetch(&id)?;
                println!("{}", ev.title);
                println!("  id:       {}", ev.id);
                println!("  date:     {}", date_key(ev.event_date));
                println!("  time:     {}", ev.time_range());
                println!("  reminder: {}", ev.notify_before);
                if let Some(description) = ev.description.as_deref().filter(|s| !s.is_empty()) {
                    println!();
                    println!("{description}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: calboard [<options>] [YYYY-MM-DD]");
                println!("       calboard login <EMAIL>");
                println!("       calboard register <EMAIL>");
                println!("       calboard logout");
                println!("       calboard list [--today|--upcoming|--date YYYY-MM-DD|--month YYYY-MM]");
                println!("       calboard show <ID>");
                println!();
                println!("Terminal month/week/day dashboard for a personal events service");
                println!();
                println!("Options:");
                println!("  -v, --view <VIEW> Start in the \"month\", \"week\", or \"day\" view");
                println!("  --api-url <URL>   Address of the events service");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                println!();
                println!("Passwords are read from $CALBOARD_PASSWORD or, failing that, stdin.");
                println!("`register` asks for the password twice and logs in afterwards.");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

fn connect(cfg: &Config) -> anyhow::Result<ApiClient> {
    let session = Session::load(&cfg.session_file)?;
    ApiClient::new(&cfg.api_url, session).context("failed to set up events service client")
}

/// Get the password from `$CALBOARD_PASSWORD`, else prompt for it on stderr
/// and read it from stdin.  When `confirm` is true, the prompted password
/// must be entered twice.
fn read_password(confirm: bool) -> anyhow::Result<String> {
    if let Some(password) = std::env::var_os(PASSWORD_VAR) {
        return password
            .into_string()
            .map_err(|_| anyhow::anyhow!("${PASSWORD_VAR} is not valid UTF-8"));
    }
    prompt_password(&mut io::stdin().lock(), &mut io::stderr(), confirm)
}

fn prompt_password<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    confirm: bool,
) -> anyhow::Result<String> {
    let password = prompt_line(input, prompts, "Password: ")?;
    if confirm && prompt_line(input, prompts, "Confirm password: ")? != password {
        anyhow::bail!("Passwords do not match");
    }
    Ok(password)
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    prompt: &str,
) -> anyhow::Result<String> {
    write!(prompts, "{prompt}").context("failed to write prompt")?;
    prompts.flush().context("failed to write prompt")?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn list_line(ev: &Event) -> String {
    format!(
        "{}  {}  {}  [{}]",
        date_key(ev.event_date),
        ev.time_range(),
        ev.title,
        ev.id
    )
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid month {0:?}; expected YYYY-MM")]
struct ParseMonthError(String);

fn parse_month(s: &str) -> Result<(i32, Month), ParseMonthError> {
    let err = || ParseMonthError(s.to_owned());
    let (year, month) = s.split_once('-').ok_or_else(err)?;
    let year = year.parse::<i32>().map_err(|_| err())?;
    let month = month
        .parse::<u8>()
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(err)?;
    Ok((year, month))
}
