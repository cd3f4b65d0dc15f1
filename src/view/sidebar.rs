use crate::event::{time_label, Event};
use crate::theme::{BASE_STYLE, HEADER_STYLE, PLACEHOLDER_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Today's agenda above a list of the events coming up after today
#[derive(Clone, Copy, Debug)]
pub(crate) struct Sidebar<'a> {
    today: &'a [Event],
    upcoming: &'a [Event],
}

impl<'a> Sidebar<'a> {
    pub(crate) fn new(today: &'a [Event], upcoming: &'a [Event]) -> Self {
        Sidebar { today, upcoming }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [today_area, upcoming_area] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Fill(1)]).areas(area);
        agenda(" Today ", self.today.iter().map(|ev| {
            Line::from_iter([
                Span::styled(format!("{} ", time_label(ev.start_time)), HEADER_STYLE),
                Span::styled(ev.title.clone(), BASE_STYLE),
            ])
        }))
        .render(today_area, buf);
        agenda(" Upcoming ", self.upcoming.iter().map(|ev| {
            let date = ev.event_date;
            Line::from_iter([
                Span::styled(
                    format!(
                        "{} {:>2} {} ",
                        &date.month().to_string()[..3],
                        date.day(),
                        time_label(ev.start_time)
                    ),
                    HEADER_STYLE,
                ),
                Span::styled(ev.title.clone(), BASE_STYLE),
            ])
        }))
        .render(upcoming_area, buf);
    }
}

fn agenda<'a, I>(title: &'a str, lines: I) -> Paragraph<'a>
where
    I: Iterator<Item = Line<'a>>,
{
    let mut lines = lines.collect::<Vec<_>>();
    if lines.is_empty() {
        lines.push(Line::styled("No events", PLACEHOLDER_STYLE));
    }
    Paragraph::new(lines)
        .block(Block::bordered().title(title))
        .style(BASE_STYLE)
}
