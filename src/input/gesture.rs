//! Multi-click classification.
//!
//! Each press is compared with the previous one. A press close enough in
//! both time and space escalates the click count, which wraps modulo 3:
//! place caret, then select word, then select line, then back to placing
//! the caret.

use crate::geometry::Point;
use std::time::Duration;

/// Thresholds for grouping presses into multi-clicks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOptions {
    /// Maximum time between two presses of one multi-click.
    pub double_click_window: Duration,
    /// Maximum distance in pixels between two presses of one multi-click.
    pub max_distance: f32,
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self {
            double_click_window: Duration::from_millis(500),
            max_distance: 5.0,
        }
    }
}

/// Selection granularity chosen by a press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Granularity {
    /// Place the caret and start a drag selection.
    #[default]
    Character,
    /// Select the word under the caret.
    Word,
    /// Select the line under the caret.
    Line,
}

impl Granularity {
    /// Granularity for a click count.
    #[must_use]
    pub fn from_count(count: u8) -> Self {
        match count % 3 {
            0 => Self::Character,
            1 => Self::Word,
            _ => Self::Line,
        }
    }
}

/// Click history of one editor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickState {
    last_time: Option<Duration>,
    last_position: Point,
    count: u8,
}

impl ClickState {
    /// Create a fresh state; the next press is a single click.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Click count of the last press, `0..3`.
    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Forget the press history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Register a press at `timestamp` (host clock) and `position`.
    pub fn press(&mut self, timestamp: Duration, position: Point, options: &ClickOptions) -> Granularity {
        let in_time = self
            .last_time
            .and_then(|last| timestamp.checked_sub(last))
            .is_some_and(|elapsed| elapsed <= options.double_click_window);
        let dx = position.x - self.last_position.x;
        let dy = position.y - self.last_position.y;
        let in_reach = dx.hypot(dy) <= options.max_distance;

        self.count = if in_time && in_reach {
            (self.count + 1) % 3
        } else {
            0
        };
        self.last_time = Some(timestamp);
        self.last_position = position;
        Granularity::from_count(self.count)
    }
}
