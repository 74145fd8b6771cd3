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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and converts colors to
//! the hexadecimal form used when styling the terminal emulator itself.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) bar_colour: Color,
    pub(crate) muted_fg: Color,

    pub(crate) highlight_fg: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) table_kind_fg: Color,
    pub(crate) table_year_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_image_fg: Color,

    pub(crate) banner_title_fg: Color,
    pub(crate) overview_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme, dark with a red accent.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 20, 28),
            accent_colour: Color::Rgb(229, 9, 20),
            border_colour: Color::Rgb(90, 90, 100),
            bar_colour: Color::Rgb(36, 36, 46),
            muted_fg: Color::Rgb(197, 197, 197),

            highlight_fg: Color::White,
            highlight_bg: Color::Rgb(120, 20, 28),

            table_kind_fg: Color::Rgb(162, 161, 166),
            table_year_fg: Color::Rgb(162, 161, 166),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_image_fg: Color::Rgb(110, 130, 160),

            banner_title_fg: Color::Rgb(255, 255, 255),
            overview_fg: Color::Rgb(221, 221, 221),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}
