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

//! Reusable UI components.
//!
//! * [`search`]: the search view, owning the query input and its results.
//! * [`result_table`]: a navigable table of catalog entries.
//! * [`detail`]: the modal overlay describing one entry.

pub(crate) mod detail;
pub(crate) mod result_table;
pub(crate) mod search;

pub(crate) use detail::DetailModal;
pub(crate) use result_table::{ResultTable, ResultTableAction};
pub(crate) use search::SearchView;
