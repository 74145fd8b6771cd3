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

//! Render the home view.
//!
//! The banner, when there is one, is followed by one bordered row per
//! configured listing. Entries in a row are laid out side by side and the
//! row scrolls horizontally to keep its highlighted entry in view.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    browser::{HomeBrowser, HomeRow},
    components::DetailModal,
    render::{
        Render,
        banner::{BANNER_HEIGHT, draw_banner},
        icons::SEPARATOR,
    },
    theme::Theme,
    util::format::truncate,
};

/// Longest entry title shown in a row, in characters.
const LABEL_LIMIT: usize = 24;

pub(crate) fn draw_home(f: &mut Frame, area: Rect, home: &mut HomeBrowser, theme: &Theme) {
    let banner_height = if home.banner.is_some() { BANNER_HEIGHT } else { 0 };

    let mut constraints = vec![Constraint::Length(banner_height)];
    constraints.extend(home.rows.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::vertical(constraints).split(area);

    if let Some(banner) = &home.banner {
        draw_banner(f, chunks[0], banner, theme);
    }

    let active_row = home.active_row;
    for (index, row) in home.rows.iter_mut().enumerate() {
        draw_row(f, chunks[index + 1], row, index == active_row, theme);
    }

    if let Some(item) = home.selected_detail_item() {
        DetailModal::new(item, home.selection.detail(), &home.backdrop_base_url).draw(f, area, theme);
    }
}

fn draw_row(f: &mut Frame, area: Rect, row: &mut HomeRow, is_active: bool, theme: &Theme) {
    let border_style = if is_active {
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", row.title))
        .border_style(border_style);

    let inner = block.inner(area);
    let separator = format!(" {SEPARATOR} ");

    let labels: Vec<String> = row.items.iter().map(|item| truncate(item.display_title(), LABEL_LIMIT)).collect();
    let widths: Vec<usize> = labels.iter().map(|l| l.chars().count() + separator.chars().count()).collect();

    let selected = row.state.selected().unwrap_or(0);
    let offset = scroll_offset(&widths, row.state.offset(), selected, inner.width as usize);
    *row.state.offset_mut() = offset;

    let mut spans = vec![];
    for (index, label) in labels.into_iter().enumerate().skip(offset) {
        let style = if is_active && Some(index) == row.state.selected() {
            Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg)
        } else {
            Style::default().fg(theme.table_title_fg)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::styled(separator.clone(), Style::default().fg(theme.border_colour)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// The first entry to draw so that `selected` fits within `width`.
fn scroll_offset(widths: &[usize], offset: usize, selected: usize, width: usize) -> usize {
    if widths.is_empty() {
        return 0;
    }

    let selected = selected.min(widths.len() - 1);
    let mut offset = offset.min(selected);
    while offset < selected && widths[offset..=selected].iter().sum::<usize>() > width {
        offset += 1;
    }

    offset
}
