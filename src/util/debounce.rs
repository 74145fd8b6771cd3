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

//! Debounced values.
//!
//! A [`Debouncer`] holds a settled value and at most one pending update. The
//! pending update is promoted once it has been left alone for the configured
//! delay. Nothing runs in the background: the owner asks for the
//! [`deadline`](Debouncer::deadline), waits until then, and calls
//! [`poll`](Debouncer::poll). Dropping or [`cancel`](Debouncer::cancel)ling
//! the debouncer therefore discards the pending update with no late effects.
//!
//! All methods take the current time explicitly.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct Debouncer<T> {
    delay: Duration,
    settled: T,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub(crate) fn new(delay: Duration, initial: T) -> Self {
        Self {
            delay,
            settled: initial,
            pending: None,
        }
    }

    /// Records a new input value at `now`, replacing any pending one.
    ///
    /// With a zero delay the value settles immediately and is returned if it
    /// differs from the previous settled value. Repeating the pending value
    /// keeps its original schedule.
    pub(crate) fn update(&mut self, value: T, now: Instant) -> Option<T> {
        if self.delay.is_zero() {
            self.pending = None;
            return self.settle(value);
        }

        if let Some((pending, _)) = &self.pending {
            if *pending == value {
                return None;
            }
        }

        self.pending = Some((value, now));
        None
    }

    /// Promotes the pending value if its delay has elapsed at `now`.
    ///
    /// Returns the new settled value, or `None` if nothing changed.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if !due {
            return None;
        }

        let (value, _) = self.pending.take()?;
        self.settle(value)
    }

    /// When the pending value is due to settle.
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.delay)
    }

    /// Settles the pending value now, without waiting for its deadline.
    pub(crate) fn flush(&mut self) -> Option<T> {
        let (value, _) = self.pending.take()?;
        self.settle(value)
    }

    /// Drops the pending value, if any.
    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    fn settle(&mut self, value: T) -> Option<T> {
        if value == self.settled {
            return None;
        }

        self.settled = value.clone();
        Some(value)
    }
}
