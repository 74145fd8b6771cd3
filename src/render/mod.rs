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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every pass of the event loop.

mod banner;
mod browser;
mod commander;
pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{App, MainView, render::commander::draw_commander, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a one line header naming the views, the active
/// view, and the command line at the bottom.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like table and row scroll positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: header, main, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    match app.main_view {
        MainView::Home => browser::draw_home(f, outer[1], &mut app.home_view, &app.theme),
        MainView::Search => app.search_view.draw(f, outer[1], &app.theme),
    };

    draw_commander(f, outer[2], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let tab = |label: &'static str, view: MainView| {
        let style = if app.main_view == view {
            Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_fg)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        Span::styled(" CineStream ", Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        tab(" 1 Home ", MainView::Home),
        Span::raw(" "),
        tab(" 2 Search ", MainView::Search),
    ]);

    f.render_widget(
        Paragraph::new(line).block(Block::default().style(Style::default().bg(theme.bar_colour))),
        area,
    );
}
