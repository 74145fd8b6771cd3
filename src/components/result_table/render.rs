// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Rendering for the result table.
//!
//! One row per entry: its kind, release year, title and artwork address.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::ResultTable,
    render::{Render, icons},
    theme::Theme,
    util::format::{image_url, or_not_available},
};

impl Render for ResultTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.items.iter().map(|item| {
            let image = item
                .image_path
                .as_deref()
                .map(|path| image_url(self.image_base_url, path))
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(Line::from(format!("{} {}", icons::kind_icon(item.kind), item.kind.label())).style(Style::default().fg(theme.table_kind_fg))),
                Cell::from(Line::from(or_not_available(item.year()).to_string()).style(Style::default().fg(theme.table_year_fg))),
                Cell::from(Line::from(item.display_title().to_string()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(image).style(Style::default().fg(theme.table_image_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Length(5),
                Constraint::Percentage(35),
                Constraint::Min(0),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Kind"),
                Cell::from("Year"),
                Cell::from("Title"),
                Cell::from("Image"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .highlight_symbol(">> ")
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
