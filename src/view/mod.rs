//! Widgets drawing the calendar grids
mod canvas;
mod month;
mod sidebar;
mod timeline;
pub(crate) use self::month::MonthView;
pub(crate) use self::sidebar::Sidebar;
pub(crate) use self::timeline::TimelineView;

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::buffer::Buffer;

    /// The text of each row of `buffer`
    pub(crate) fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
                    .collect()
            })
            .collect()
    }
}
