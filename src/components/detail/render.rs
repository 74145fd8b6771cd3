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

//! Rendering for the detail modal.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::DetailModal,
    render::{Render, icons::{ICON_PLAY, ICON_STAR}},
    theme::Theme,
};

impl Render for DetailModal<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered(area, 80, 70);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title()))
            .title_bottom(Line::from(" Esc to close ").right_aligned())
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour))
            .padding(Padding::horizontal(1));

        let label = Style::default().bold().fg(theme.accent_colour);
        let value = Style::default().fg(theme.highlight_fg);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{ICON_STAR} "), label),
                Span::styled(self.rating(), value),
                Span::raw("   "),
                Span::styled("Released ", label),
                Span::styled(self.release().to_string(), value),
            ]),
        ];

        if let Some(genres) = self.genres() {
            lines.push(Line::from(vec![Span::styled("Genres ", label), Span::styled(genres, value)]));
        }
        if let Some(runtime) = self.runtime() {
            lines.push(Line::from(vec![Span::styled("Runtime ", label), Span::styled(runtime, value)]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(self.overview().to_string(), Style::default().fg(theme.overview_fg))));
        lines.push(Line::default());

        if let Some(url) = self.backdrop_url() {
            lines.push(Line::from(vec![Span::styled("Backdrop ", label), Span::styled(url, Style::default().fg(theme.muted_fg))]));
        }
        if let Some(url) = self.trailer_url() {
            lines.push(Line::from(vec![
                Span::styled(format!("{ICON_PLAY} Trailer "), label),
                Span::styled(url, Style::default().fg(theme.muted_fg)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, popup);
    }
}

/// A rectangle of the given percentage size, centred in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center).areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center).areas(area);
    area
}
