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

const NOT_AVAILABLE: &str = "N/A";

/// Builds the URL of a catalog image from the configured image host prefix
/// and the image path returned by the catalog.
///
/// The path already carries its leading `/`, so the two are concatenated as
/// they are.
///
/// # Examples
///
/// ```
/// assert_eq!(image_url("https://image.tmdb.org/t/p/w500", "/x.jpg"),
///            "https://image.tmdb.org/t/p/w500/x.jpg");
/// ```
pub(crate) fn image_url(prefix: &str, path: &str) -> String {
    format!("{prefix}{path}")
}

/// Formats an average vote with one decimal place, or `N/A`.
pub(crate) fn format_rating(vote_average: Option<f64>) -> String {
    vote_average
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub(crate) fn or_not_available(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(NOT_AVAILABLE)
}

/// Formats a runtime in minutes as `1h 05m`, or `N/A` when unknown.
///
/// # Examples
///
/// ```
/// assert_eq!(format_runtime(Some(152)), "2h 32m");
/// assert_eq!(format_runtime(Some(0)), "N/A");
/// ```
pub(crate) fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) if m > 0 => format!("{}h {:02}m", m / 60, m % 60),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with
/// `...`.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_url_is_prefix_and_path() {
        assert_eq!(
            image_url("https://image.tmdb.org/t/p/w500", "/x.jpg"),
            "https://image.tmdb.org/t/p/w500/x.jpg"
        );
    }

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(format_rating(Some(8.456)), "8.5");
        assert_eq!(format_rating(Some(7.0)), "7.0");
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn runtime_in_hours_and_minutes() {
        assert_eq!(format_runtime(Some(152)), "2h 32m");
        assert_eq!(format_runtime(Some(45)), "0h 45m");
        assert_eq!(format_runtime(None), "N/A");
    }

    #[test]
    fn truncate_cuts_long_text_only() {
        assert_eq!(truncate("short", 100), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("영화가 없습니다", 2), "영화...");
    }

    #[test]
    fn blank_values_are_not_available() {
        assert_eq!(or_not_available(Some("2008-07-16")), "2008-07-16");
        assert_eq!(or_not_available(Some("")), "N/A");
        assert_eq!(or_not_available(None), "N/A");
    }
}
