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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

use crate::model::MediaKind;

// Text-style variants (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icons as monochrome text rather than colorful
// emojis, ensuring they respect the TUI's color styling.
pub(crate) const ICON_MOVIE: &str = "\u{1F39E}\u{FE0E}";
pub(crate) const ICON_TV: &str = "\u{1F4FA}\u{FE0E}";
pub(crate) const ICON_PERSON: &str = "\u{263A}\u{FE0E}";
pub(crate) const ICON_OTHER: &str = "\u{2022}";

pub(crate) const ICON_STAR: &str = "\u{2605}";
pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const SEPARATOR: &str = "\u{2502}";

pub(crate) fn kind_icon(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => ICON_MOVIE,
        MediaKind::Tv => ICON_TV,
        MediaKind::Person => ICON_PERSON,
        MediaKind::Other => ICON_OTHER,
    }
}
