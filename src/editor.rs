use crate::form::{EventDraft, Submission};
use crate::theme::{
    editor::{ERROR_STYLE, FIELD_STYLE, FOCUSED_FIELD_STYLE, LABEL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

const OUTER_WIDTH: u16 = 56;
const OUTER_HEIGHT: u16 = 14;
const LABEL_WIDTH: usize = 13;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Field {
    Title,
    Description,
    Date,
    Start,
    End,
    NotifyBefore,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Title,
        Field::Description,
        Field::Date,
        Field::Start,
        Field::End,
        Field::NotifyBefore,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Date => "Date",
            Field::Start => "Start",
            Field::End => "End",
            Field::NotifyBefore => "Reminder",
        }
    }

    /// Longest value a free-text field accepts
    fn max_len(self) -> usize {
        match self {
            Field::Title => 100,
            Field::Description => 500,
            Field::Date => 10,
            Field::Start | Field::End => 8,
            Field::NotifyBefore => 0,
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Field::Title | Field::Description => !c.is_control(),
            Field::Date => c.is_ascii_digit() || c == '-',
            Field::Start | Field::End => c.is_ascii_digit() || c == ':',
            Field::NotifyBefore => false,
        }
    }

    fn next(self) -> Field {
        let i = Field::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Field::ALL[(i + 1) % Field::ALL.len()]
    }

    fn prev(self) -> Field {
        let i = Field::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Field::ALL[(i + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// The event creation/editing form
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct EditorState {
    draft: EventDraft,
    field: Field,
    error: Option<String>,
}

impl EditorState {
    pub(crate) fn new(draft: EventDraft) -> EditorState {
        EditorState {
            draft,
            field: Field::Title,
            error: None,
        }
    }

    pub(crate) fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub(crate) fn field(&self) -> Field {
        self.field
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show an error that occurred while saving the submitted draft
    pub(crate) fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    fn value_mut(&mut self) -> Option<&mut String> {
        match self.field {
            Field::Title => Some(&mut self.draft.title),
            Field::Description => Some(&mut self.draft.description),
            Field::Date => Some(&mut self.draft.date),
            Field::Start => Some(&mut self.draft.start),
            Field::End => Some(&mut self.draft.end),
            Field::NotifyBefore => None,
        }
    }

    pub(crate) fn handle_input(&mut self, input: EditorInput) -> EditorOutput {
        match input {
            EditorInput::Char(' ') if self.field == Field::NotifyBefore => {
                self.draft.notify_before = self.draft.notify_before.next();
                EditorOutput::Ok
            }
            EditorInput::Char(c) => {
                let field = self.field;
                match self.value_mut() {
                    Some(value) if field.accepts(c) && value.chars().count() < field.max_len() => {
                        value.push(c);
                        EditorOutput::Ok
                    }
                    _ => EditorOutput::Invalid,
                }
            }
            EditorInput::Backspace => match self.value_mut().and_then(String::pop) {
                Some(_) => EditorOutput::Ok,
                None => EditorOutput::Invalid,
            },
            EditorInput::NextField => {
                self.field = self.field.next();
                EditorOutput::Ok
            }
            EditorInput::PrevField => {
                self.field = self.field.prev();
                EditorOutput::Ok
            }
            EditorInput::Submit => match self.draft.submit() {
                Ok(submission) => {
                    self.error = None;
                    EditorOutput::Submit(submission)
                }
                Err(e) => {
                    self.error = Some(e.to_string());
                    EditorOutput::Invalid
                }
            },
        }
    }

    fn value_text(&self, field: Field) -> String {
        match field {
            Field::Title => self.draft.title.clone(),
            Field::Description => self.draft.description.clone(),
            Field::Date => self.draft.date.clone(),
            Field::Start => self.draft.start.clone(),
            Field::End => self.draft.end.clone(),
            Field::NotifyBefore => format!("< {} >", self.draft.notify_before),
        }
    }

    fn to_text(&self, width: usize) -> Text<'static> {
        let value_width = width.saturating_sub(LABEL_WIDTH);
        let mut lines = vec![Line::styled("", BASE_STYLE)];
        for field in Field::ALL {
            let mut value = self.value_text(field);
            // Show the end of overlong values so that the text being typed
            // stays visible
            let excess = value.chars().count().saturating_sub(value_width);
            if excess > 0 {
                value = value.chars().skip(excess).collect();
            }
            let style = if field == self.field() {
                FOCUSED_FIELD_STYLE
            } else {
                FIELD_STYLE
            };
            lines.push(Line::from_iter([
                Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), LABEL_STYLE),
                Span::styled(format!("{value:<value_width$}"), style),
            ]));
        }
        lines.push(Line::styled("", BASE_STYLE));
        lines.push(match self.error() {
            Some(msg) => Line::styled(msg.to_owned(), ERROR_STYLE),
            None => Line::styled("", BASE_STYLE),
        });
        lines.push(Line::styled("", BASE_STYLE));
        lines.push(Line::styled(
            "TAB: next field  ENTER: save  ESC: cancel",
            LABEL_STYLE,
        ));
        Text::from(lines)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EditorInput {
    Char(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum EditorOutput {
    Ok,
    Invalid,
    Submit(Submission),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Editor;

impl StatefulWidget for Editor {
    type State = EditorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT.min(area.height)])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 0));
        let title = if state.draft().is_edit() {
            " Edit Event "
        } else {
            " New Event "
        };
        Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state
            .to_text(usize::from(text_area.width))
            .render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::testing::event;
    use crate::event::{EventId, NotifyBefore};
    use time::macros::date;

    fn type_str(state: &mut EditorState, s: &str) {
        for c in s.chars() {
            assert_eq!(state.handle_input(EditorInput::Char(c)), EditorOutput::Ok);
        }
    }

    #[test]
    fn test_fill_in_new_event() {
        let mut state = EditorState::new(EventDraft::for_date(date!(2026 - 10 - 19)));
        type_str(&mut state, "Lunch");
        assert_eq!(state.handle_input(EditorInput::NextField), EditorOutput::Ok);
        assert_eq!(state.field(), Field::Description);
        state.handle_input(EditorInput::NextField);
        state.handle_input(EditorInput::NextField);
        assert_eq!(state.field(), Field::Start);
        for _ in 0..5 {
            assert_eq!(state.handle_input(EditorInput::Backspace), EditorOutput::Ok);
        }
        assert_eq!(
            state.handle_input(EditorInput::Backspace),
            EditorOutput::Invalid
        );
        assert_eq!(
            state.handle_input(EditorInput::Char('x')),
            EditorOutput::Invalid
        );
        type_str(&mut state, "12:30");
        state.handle_input(EditorInput::PrevField);
        state.handle_input(EditorInput::PrevField);
        state.handle_input(EditorInput::PrevField);
        state.handle_input(EditorInput::PrevField);
        assert_eq!(state.field(), Field::NotifyBefore);
        assert_eq!(state.handle_input(EditorInput::Char(' ')), EditorOutput::Ok);
        assert_eq!(state.draft().notify_before, NotifyBefore::Thirty);
        assert_eq!(state.draft().title, "Lunch");
        assert_eq!(state.draft().start, "12:30");
    }

    #[test]
    fn test_submit_shows_validation_error() {
        let mut state = EditorState::new(EventDraft::for_date(date!(2026 - 10 - 19)));
        assert_eq!(state.handle_input(EditorInput::Submit), EditorOutput::Invalid);
        assert_eq!(state.error(), Some("Title is required"));
        type_str(&mut state, "Lunch");
        let EditorOutput::Submit(Submission::Create(new)) =
            state.handle_input(EditorInput::Submit)
        else {
            panic!("complete draft should submit");
        };
        assert_eq!(new.title, "Lunch");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_edit_existing() {
        let ev = event("5", "Gym", "2026-10-20", "18:00", "19:00");
        let mut state = EditorState::new(EventDraft::for_event(&ev));
        type_str(&mut state, " class");
        let EditorOutput::Submit(Submission::Update(id, patch)) =
            state.handle_input(EditorInput::Submit)
        else {
            panic!("edited draft should submit an update");
        };
        assert_eq!(id, EventId::new("5"));
        assert_eq!(patch.title.as_deref(), Some("Gym class"));
    }

    #[test]
    fn test_render() {
        let mut state = EditorState::new(EventDraft::for_date(date!(2026 - 10 - 19)));
        type_str(&mut state, "Lunch");
        let area = Rect::new(0, 0, 56, 14);
        let mut buffer = Buffer::empty(area);
        Editor.render(area, &mut buffer, &mut state);
        let lines = (0..14)
            .map(|y| {
                (0..56)
                    .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        assert!(lines[0].contains(" New Event "), "{:?}", lines[0]);
        assert!(lines[2].contains("Title        Lunch"), "{:?}", lines[2]);
        assert!(lines[4].contains("Date         2026-10-19"), "{:?}", lines[4]);
        assert!(
            lines[7].contains("Reminder     < 10 minutes before >"),
            "{:?}",
            lines[7]
        );
    }
}
