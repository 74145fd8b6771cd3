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

//! Rendering for the search view.
//!
//! The query input sits on top. Below it the body reflects the current
//! [`RenderState`], and the detail modal is drawn over everything while an
//! entry is selected.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{DetailModal, SearchView},
    model::{SearchQuery, search::RenderState},
    render::Render,
    theme::Theme,
};

const IDLE_HINT: &str = "Type to search movies and TV shows.";
const LOADING: &str = "Searching...";

pub(crate) fn empty_message(query: &SearchQuery) -> String {
    format!("There are no movies matching \"{query}\".")
}

impl Render for SearchView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [input_area, body_area] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        self.draw_input(f, input_area, theme);

        let message = match self.pipeline.state() {
            RenderState::Idle => Some(IDLE_HINT.to_string()),
            RenderState::Loading => Some(LOADING.to_string()),
            RenderState::Empty(query) => Some(empty_message(query)),
            RenderState::Results(_) => None,
        };

        match message {
            Some(message) => {
                let paragraph = Paragraph::new(message)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.muted_fg))
                    .block(Block::default().padding(Padding::top(1)));
                f.render_widget(paragraph, body_area);
            }
            None => self.results_widget().draw(f, body_area, theme),
        }

        if let Some(item) = self.selection.resolve(self.pipeline.results()) {
            DetailModal::new(item, self.selection.detail(), &self.backdrop_base_url).draw(f, area, theme);
        }
    }
}

impl SearchView {
    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.captures_text() { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border));

        let inner = block.inner(area);
        let scroll = self.input.visual_scroll(inner.width.max(1) as usize);

        let paragraph = Paragraph::new(self.input.value())
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(paragraph, area);

        if self.captures_text() {
            let cursor = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + cursor, inner.y));
        }
    }
}
