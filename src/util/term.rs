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

//! Terminal emulator background control.
//!
//! Uses the OSC 11 (set) and OSC 111 (reset) escape sequences. Terminals that
//! do not understand them ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

fn write_background(out: &mut impl Write, colour: Color) -> io::Result<()> {
    write!(out, "\x1b]11;{}\x07", Theme::to_hex(colour))?;
    out.flush()
}

fn write_reset(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1b]111\x07")?;
    out.flush()
}

/// Paints the whole terminal window with `colour`, so no outline of the
/// user's own background shows around the UI.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    write_background(&mut io::stdout(), colour)
}

/// Reverts the background to the user's own configuration. Best effort.
pub(crate) fn reset_terminal_bg() {
    write_reset(&mut io::stdout()).ok();
}
