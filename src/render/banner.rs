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

//! Render the home view banner.
//!
//! The banner features one movie: its title, a short overview and a link to
//! its trailer when one exists.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    model::MovieDetail,
    render::icons::ICON_PLAY,
    theme::Theme,
    util::format::truncate,
};

/// Longest overview shown in the banner, in characters.
const OVERVIEW_LIMIT: usize = 100;

/// Rows taken by the banner, borders included.
pub(crate) const BANNER_HEIGHT: u16 = 7;

pub(crate) fn draw_banner(f: &mut Frame, area: Rect, banner: &MovieDetail, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let mut lines = vec![
        Line::from(Span::styled(
            banner.display_title().to_string(),
            Style::default().fg(theme.banner_title_fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(banner.overview.as_deref().unwrap_or_default(), OVERVIEW_LIMIT),
            Style::default().fg(theme.overview_fg),
        )),
    ];

    if let Some(url) = banner.trailer_url() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("{ICON_PLAY} Play trailer "), Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
            Span::styled(url, Style::default().fg(theme.muted_fg)),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
