use crate::editor::{Editor, EditorInput, EditorOutput, EditorState};
use crate::event::{date_key, Event};
use crate::form::{EventDraft, Submission};
use crate::grid::{events_on, DayGrid, Granularity, MonthGrid, WeekGrid};
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::navigate::ViewState;
use crate::reschedule::{Effect, Held};
use crate::store::{EventSource, EventStore};
use crate::theme::{BASE_STYLE, ERROR_STYLE, STATUS_STYLE, TITLE_STYLE};
use crate::view::{MonthView, Sidebar, TimelineView};
use crossterm::event::{read, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use reqwest::StatusCode;
use std::io::{self, Write};

/// Terminals at least this wide get a sidebar listing today's and upcoming
/// events
const SIDEBAR_MIN_TOTAL_WIDTH: u16 = 100;

const SIDEBAR_WIDTH: u16 = 32;

#[derive(Debug)]
pub(crate) struct App<S> {
    store: EventStore<S>,
    view: ViewState,
    state: AppState,
    /// Index of the focused event among the selected day's events
    focus: usize,
    status: Status,
}

impl<S: EventSource> App<S> {
    pub(crate) fn new(store: EventStore<S>, view: ViewState) -> App<S> {
        App {
            store,
            view,
            state: AppState::Calendar,
            focus: 0,
            status: Status::Idle,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let TermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => self.handle_calendar_key(key),
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    return true;
                }
                let output = match key {
                    KeyCode::Char(c) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                        Some(d) => state.handle_input(JumpToInput::Digit(d)),
                        None => JumpToOutput::Invalid,
                    },
                    KeyCode::Backspace | KeyCode::Delete => state.handle_input(JumpToInput::Backspace),
                    KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                    _ => JumpToOutput::Invalid,
                };
                match output {
                    JumpToOutput::Ok => true,
                    JumpToOutput::Invalid => false,
                    JumpToOutput::Jump(date) => {
                        self.state = AppState::Calendar;
                        self.view.jump_to_date(date);
                        self.focus = 0;
                        true
                    }
                }
            }
            AppState::Editing(state) => {
                let input = match key {
                    KeyCode::Esc => {
                        self.state = AppState::Calendar;
                        return true;
                    }
                    KeyCode::Char(c) => EditorInput::Char(c),
                    KeyCode::Backspace => EditorInput::Backspace,
                    KeyCode::Tab | KeyCode::Down => EditorInput::NextField,
                    KeyCode::BackTab | KeyCode::Up => EditorInput::PrevField,
                    KeyCode::Enter => EditorInput::Submit,
                    _ => return false,
                };
                match state.handle_input(input) {
                    EditorOutput::Ok => true,
                    EditorOutput::Invalid => false,
                    EditorOutput::Submit(submission) => {
                        self.submit(&submission);
                        true
                    }
                }
            }
            AppState::Moving(_) => self.handle_moving_key(key),
            AppState::Quitting => false,
        }
    }

    fn handle_calendar_key(&mut self, key: KeyCode) -> bool {
        self.status = Status::Idle;
        match key {
            KeyCode::Char('h') | KeyCode::Left => self.move_selection(-1),
            KeyCode::Char('l') | KeyCode::Right => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-7),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(7),
            KeyCode::Char('[') | KeyCode::PageUp => self.page(false),
            KeyCode::Char(']') | KeyCode::PageDown => self.page(true),
            KeyCode::Char('M') => self.set_granularity(Granularity::Month),
            KeyCode::Char('W') => self.set_granularity(Granularity::Week),
            KeyCode::Char('D') => self.set_granularity(Granularity::Day),
            KeyCode::Char('0') | KeyCode::Home => {
                self.view.jump_to_today();
                self.focus = 0;
                true
            }
            KeyCode::Char('g') => {
                self.state = AppState::Jumping(JumpToState::new());
                true
            }
            KeyCode::Char('n') => {
                let draft = EventDraft::for_date(self.view.cursor());
                self.state = AppState::Editing(EditorState::new(draft));
                true
            }
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Char('e') | KeyCode::Enter => match self.focused_event() {
                Some(ev) => {
                    let effect = Effect::OpenEvent(ev.id.clone());
                    self.dispatch(effect);
                    true
                }
                None => false,
            },
            KeyCode::Char('x') => self.delete_focused(),
            KeyCode::Char('m') if self.view.granularity != Granularity::Month => false,
            KeyCode::Char('m') => match self.focused_event() {
                Some(ev) => {
                    self.state = AppState::Moving(Held::new(ev.clone()));
                    true
                }
                None => false,
            },
            KeyCode::Char('r') => {
                self.refresh();
                true
            }
            KeyCode::Char('?') => {
                self.state = AppState::Helping;
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state = AppState::Quitting;
                true
            }
            _ => false,
        }
    }

    fn handle_moving_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('h') | KeyCode::Left => self.move_selection(-1),
            KeyCode::Char('l') | KeyCode::Right => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-7),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(7),
            KeyCode::Char('[') | KeyCode::PageUp => self.page(false),
            KeyCode::Char(']') | KeyCode::PageDown => self.page(true),
            KeyCode::Enter => {
                if let AppState::Moving(held) = std::mem::replace(&mut self.state, AppState::Calendar) {
                    match held.drop_on(self.view.cursor()) {
                        Some(effect) => self.dispatch(effect),
                        None => self.status = Status::Info(String::from("Event not moved")),
                    }
                }
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state = AppState::Calendar;
                self.status = Status::Info(String::from("Move cancelled"));
                true
            }
            _ => false,
        }
    }

    /// Carry out an effect produced by the calendar
    pub(crate) fn dispatch(&mut self, effect: Effect) {
        match effect {
            Effect::SelectDate(date) => {
                if self.view.selected != Some(date) {
                    self.focus = 0;
                }
                self.view.select(date);
            }
            Effect::OpenEvent(ref id) => match self.store.get(id) {
                Some(ev) => {
                    let draft = EventDraft::for_event(ev);
                    self.state = AppState::Editing(EditorState::new(draft));
                }
                None => self.status = Status::Error(format!("Event {id} not found")),
            },
            Effect::Move { new_date, .. } => match self.store.apply(&effect) {
                Ok(()) => {
                    self.status = Status::Info(format!("Moved to {}", date_key(new_date)));
                    self.view.select(new_date);
                    self.focus = 0;
                }
                Err(e) => self.status = Status::Error(e.to_string()),
            },
        }
    }

    /// Reload all events from the source
    pub(crate) fn refresh(&mut self) {
        self.status = match self.store.refresh() {
            Ok(()) => Status::Info(format!("Loaded {} events", self.store.events().len())),
            Err(e) if e.status() == Some(StatusCode::UNAUTHORIZED) => Status::Error(String::from(
                "Session expired; run `calboard login <EMAIL>` again",
            )),
            Err(e) => Status::Error(e.to_string()),
        };
    }

    fn submit(&mut self, submission: &Submission) {
        let (verb, result) = match submission {
            Submission::Create(new) => ("Created", self.store.create(new)),
            Submission::Update(id, patch) => ("Updated", self.store.update(id, patch)),
        };
        match result {
            Ok(ev) => {
                let msg = format!("{verb} \"{}\"", ev.title);
                let date = ev.event_date;
                self.state = AppState::Calendar;
                self.status = Status::Info(msg);
                self.dispatch(Effect::SelectDate(date));
            }
            Err(e) => {
                if let AppState::Editing(state) = &mut self.state {
                    state.set_error(e.to_string());
                }
            }
        }
    }

    fn beep(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn move_selection(&mut self, days: i64) -> bool {
        let before = self.view.cursor();
        if self.view.move_selection(days).is_err() {
            return false;
        }
        if self.view.cursor() != before {
            self.focus = 0;
        }
        true
    }

    fn page(&mut self, forwards: bool) -> bool {
        let r = if forwards {
            self.view.forwards()
        } else {
            self.view.backwards()
        };
        self.focus = 0;
        r.is_ok()
    }

    fn set_granularity(&mut self, granularity: Granularity) -> bool {
        self.view.set_granularity(granularity);
        true
    }

    fn selected_events(&self) -> Vec<&Event> {
        events_on(self.store.events(), self.view.cursor())
    }

    fn focused_event(&self) -> Option<&Event> {
        self.selected_events().get(self.focus).copied()
    }

    fn cycle_focus(&mut self, forwards: bool) -> bool {
        let qty = self.selected_events().len();
        if qty == 0 {
            return false;
        }
        let focus = self.focus.min(qty - 1);
        self.focus = if forwards {
            (focus + 1) % qty
        } else {
            (focus + qty - 1) % qty
        };
        true
    }

    fn delete_focused(&mut self) -> bool {
        let Some(ev) = self.focused_event() else {
            return false;
        };
        let id = ev.id.clone();
        let title = ev.title.clone();
        self.status = match self.store.delete(&id) {
            Ok(()) => {
                self.focus = self.focus.saturating_sub(1);
                Status::Info(format!("Deleted \"{title}\""))
            }
            Err(e) => Status::Error(e.to_string()),
        };
        true
    }

    fn status_line(&self) -> (String, Style) {
        if let AppState::Moving(held) = &self.state {
            return (held.describe(self.view.cursor()), STATUS_STYLE);
        }
        match &self.status {
            Status::Info(msg) => (msg.clone(), STATUS_STYLE),
            Status::Error(msg) => (msg.clone(), ERROR_STYLE),
            Status::Idle => {
                let events = self.selected_events();
                if let Some(ev) = events.get(self.focus) {
                    let msg = format!(
                        "{}  {}  ({}/{})",
                        ev.time_range(),
                        ev.title,
                        self.focus + 1,
                        events.len()
                    );
                    (msg, STATUS_STYLE)
                } else if let Some(err) = self.store.error() {
                    (err.to_owned(), ERROR_STYLE)
                } else {
                    (String::new(), STATUS_STYLE)
                }
            }
        }
    }
}

impl<S: EventSource> Widget for &mut App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [title_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let (grid_area, sidebar_area) = if area.width >= SIDEBAR_MIN_TOTAL_WIDTH {
            let [grid_area, sidebar_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(SIDEBAR_WIDTH)])
                    .areas(body_area);
            (grid_area, Some(sidebar_area))
        } else {
            (body_area, None)
        };
        let view = self.view;
        let events = self.store.events();
        let focus = Some(self.focus);
        let moving = matches!(self.state, AppState::Moving(_));
        let title = match view.granularity {
            Granularity::Month => {
                let grid = MonthGrid::new(view.reference, view.today, view.selected, events);
                MonthView::new(&grid)
                    .focus(focus)
                    .moving(moving)
                    .render(grid_area, buf);
                grid.title()
            }
            Granularity::Week => {
                match WeekGrid::new(view.reference, view.today, view.selected, events) {
                    Ok(grid) => {
                        TimelineView::new(grid.columns())
                            .focus(focus)
                            .moving(moving)
                            .render(grid_area, buf);
                        grid.title()
                    }
                    Err(e) => e.to_string(),
                }
            }
            Granularity::Day => {
                let grid = DayGrid::new(view.today, view.selected, events);
                TimelineView::new(std::slice::from_ref(&grid.column))
                    .focus(focus)
                    .moving(moving)
                    .render(grid_area, buf);
                grid.title()
            }
        };
        Line::from_iter([
            Span::styled(format!(" {title} "), TITLE_STYLE),
            Span::styled(format!(" {} view    ? for help", view.granularity), BASE_STYLE),
        ])
        .render(title_area, buf);
        if let Some(sidebar_area) = sidebar_area {
            Sidebar::new(self.store.today(), self.store.upcoming()).render(sidebar_area, buf);
        }
        let (status, style) = self.status_line();
        buf.set_style(status_area, style);
        Line::styled(format!(" {status}"), style).render(status_area, buf);
        match &mut self.state {
            AppState::Helping => Help(BASE_STYLE).render(body_area, buf),
            AppState::Jumping(state) => JumpTo.render(body_area, buf, state),
            AppState::Editing(state) => Editor.render(body_area, buf, state),
            AppState::Calendar | AppState::Moving(_) | AppState::Quitting => (),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Editing(EditorState),
    /// An event has been picked up and is waiting to be dropped on the
    /// selected day
    Moving(Held),
    Quitting,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Status {
    Idle,
    Info(String),
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::testing::event;
    use crate::store::testing::FakeSource;
    use crate::view::testing::buffer_lines;
    use time::macros::date;

    fn app() -> App<FakeSource> {
        let mut src = FakeSource::with_events(vec![
            event("1", "Standup", "2026-10-19", "09:00", "09:15"),
            event("2", "Gym", "2026-10-19", "18:00", "19:00"),
            event("3", "Dinner", "2026-10-24", "19:00", "21:00"),
        ]);
        src.today = Some(date!(2026 - 10 - 19));
        let view = ViewState::new(date!(2026 - 10 - 19), Granularity::Month);
        let mut app = App::new(EventStore::new(src), view);
        app.refresh();
        app
    }

    fn press(app: &mut App<FakeSource>, keys: &str) {
        for c in keys.chars() {
            assert!(app.handle_key(KeyCode::Char(c)), "key {c:?} rejected");
        }
    }

    fn render(app: &mut App<FakeSource>, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        Widget::render(&mut *app, area, &mut buffer);
        buffer_lines(&buffer)
    }

    #[test]
    fn test_navigation() {
        let mut app = app();
        assert_eq!(app.status, Status::Info(String::from("Loaded 3 events")));
        press(&mut app, "l");
        assert_eq!(app.view.selected, Some(date!(2026 - 10 - 20)));
        press(&mut app, "j");
        assert_eq!(app.view.selected, Some(date!(2026 - 10 - 27)));
        assert_eq!(app.view.reference, date!(2026 - 10 - 19));
        press(&mut app, "]");
        assert_eq!(app.view.reference, date!(2026 - 11 - 19));
        assert_eq!(app.view.selected, Some(date!(2026 - 11 - 19)));
        press(&mut app, "W");
        assert_eq!(app.view.granularity, Granularity::Week);
        press(&mut app, "[");
        assert_eq!(app.view.reference, date!(2026 - 11 - 12));
        press(&mut app, "0");
        assert_eq!(app.view.reference, date!(2026 - 10 - 19));
        assert!(!app.handle_key(KeyCode::Char('z')));
        assert!(app.handle_key(KeyCode::PageDown));
        assert_eq!(app.view.reference, date!(2026 - 10 - 26));
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app();
        press(&mut app, "?");
        assert_eq!(app.state, AppState::Helping);
        press(&mut app, "z");
        assert_eq!(app.state, AppState::Calendar);
        press(&mut app, "q");
        assert!(app.quitting());
    }

    #[test]
    fn test_jump_to_date() {
        let mut app = app();
        press(&mut app, "g20270105");
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.view.reference, date!(2027 - 01 - 05));
        assert_eq!(app.view.selected, Some(date!(2027 - 01 - 05)));
    }

    #[test]
    fn test_create_event() {
        let mut app = app();
        press(&mut app, "lnLunch");
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.status, Status::Info(String::from("Created \"Lunch\"")));
        let created = app.store.events().last().unwrap();
        assert_eq!(created.title, "Lunch");
        assert_eq!(created.event_date, date!(2026 - 10 - 20));
    }

    #[test]
    fn test_create_requires_title() {
        let mut app = app();
        press(&mut app, "n");
        assert!(!app.handle_key(KeyCode::Enter));
        let AppState::Editing(state) = &app.state else {
            panic!("editor should stay open");
        };
        assert_eq!(state.error(), Some("Title is required"));
        assert!(app.handle_key(KeyCode::Esc));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.store.events().len(), 3);
    }

    #[test]
    fn test_edit_focused_event() {
        let mut app = app();
        assert_eq!(app.focused_event().map(|ev| ev.title.as_str()), Some("Standup"));
        assert!(app.handle_key(KeyCode::Tab));
        assert_eq!(app.focused_event().map(|ev| ev.title.as_str()), Some("Gym"));
        press(&mut app, "e!");
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.status, Status::Info(String::from("Updated \"Gym!\"")));
        let titles = app
            .store
            .events()
            .iter()
            .map(|ev| ev.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Standup", "Gym!", "Dinner"]);
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::BackTab));
        assert_eq!(app.focus, 1);
        assert!(app.handle_key(KeyCode::Tab));
        assert_eq!(app.focus, 0);
        press(&mut app, "l");
        assert!(!app.handle_key(KeyCode::Tab));
        assert!(!app.handle_key(KeyCode::Char('e')));
    }

    #[test]
    fn test_delete_focused_event() {
        let mut app = app();
        press(&mut app, "x");
        assert_eq!(app.status, Status::Info(String::from("Deleted \"Standup\"")));
        assert_eq!(app.store.events().len(), 2);
        assert_eq!(app.focused_event().map(|ev| ev.title.as_str()), Some("Gym"));
    }

    #[test]
    fn test_move_event() {
        let mut app = app();
        press(&mut app, "m");
        assert!(matches!(app.state, AppState::Moving(_)));
        press(&mut app, "ll");
        assert_eq!(
            app.status_line().0,
            "Moving \"Standup\" to 2026-10-21"
        );
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.status, Status::Info(String::from("Moved to 2026-10-21")));
        let moved = app.store.events().first().unwrap();
        assert_eq!(moved.title, "Standup");
        assert_eq!(moved.event_date, date!(2026 - 10 - 21));
        assert_eq!(app.view.selected, Some(date!(2026 - 10 - 21)));
    }

    #[test]
    fn test_move_only_from_month_view() {
        let mut app = app();
        for view in ["W", "D"] {
            press(&mut app, view);
            assert!(!app.handle_key(KeyCode::Char('m')));
            assert_eq!(app.state, AppState::Calendar);
        }
        press(&mut app, "Mm");
        assert!(matches!(app.state, AppState::Moving(_)));
    }

    #[test]
    fn test_drop_on_same_day() {
        let mut app = app();
        press(&mut app, "m");
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.status, Status::Info(String::from("Event not moved")));
        assert_eq!(
            app.store.events().first().map(|ev| ev.event_date),
            Some(date!(2026 - 10 - 19))
        );
    }

    #[test]
    fn test_failed_move_reports_error() {
        let mut app = app();
        press(&mut app, "mlll");
        app.store.source().fail.set(true);
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(
            app.status,
            Status::Error(String::from("Failed to update event"))
        );
        assert_eq!(
            app.store.events().first().map(|ev| ev.event_date),
            Some(date!(2026 - 10 - 19))
        );
    }

    #[test]
    fn test_refresh_failure() {
        let mut app = app();
        app.store.source().fail.set(true);
        press(&mut app, "r");
        assert_eq!(
            app.status,
            Status::Error(String::from("Failed to fetch events"))
        );
        assert_eq!(app.store.events().len(), 3);
    }

    #[test]
    fn test_render_month() {
        let mut app = app();
        let lines = render(&mut app, 80, 30);
        assert!(lines[0].starts_with(" October 2026  month view"), "{:?}", lines[0]);
        assert!(lines[29].starts_with(" Loaded 3 events"), "{:?}", lines[29]);
        assert!(lines.iter().any(|ln| ln.contains("[19]")));
        assert!(lines.iter().any(|ln| ln.contains("Standup")));
        assert!(!lines.iter().any(|ln| ln.contains(" Today ")));
        press(&mut app, "h");
        let lines = render(&mut app, 80, 30);
        assert_eq!(lines[29].trim_end(), "");
        press(&mut app, "l");
        let lines = render(&mut app, 80, 30);
        assert_eq!(lines[29].trim_end(), " 09:00 - 09:15  Standup  (1/2)");
    }

    #[test]
    fn test_render_sidebar_on_wide_terminals() {
        let mut app = app();
        let lines = render(&mut app, 110, 30);
        assert!(lines[1][78..].starts_with("┌ Today "), "{:?}", &lines[1]);
        assert!(lines.iter().any(|ln| ln.contains("Oct 24 19:00 Dinner")));
    }

    #[test]
    fn test_render_week_and_day_titles() {
        let mut app = app();
        press(&mut app, "W");
        let lines = render(&mut app, 80, 30);
        assert!(lines[0].starts_with(" Oct 2026  week view"), "{:?}", lines[0]);
        press(&mut app, "D");
        let lines = render(&mut app, 80, 30);
        assert!(
            lines[0].starts_with(" Monday, October 19, 2026  day view"),
            "{:?}",
            lines[0]
        );
    }

    #[test]
    fn test_render_editor_overlay() {
        let mut app = app();
        press(&mut app, "n");
        let lines = render(&mut app, 80, 30);
        assert!(lines.iter().any(|ln| ln.contains(" New Event ")));
    }
}
