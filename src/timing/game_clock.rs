//! Two countdown timers advanced by an external periodic tick.
//!
//! The clock owns no thread or timer: the host calls `on_tick` once per
//! elapsed second. At most one side runs at a time. Remaining time has no
//! floor, and a timeout is only a notification; the game keeps going.

use crate::game_state::chess_types::Color;
use crate::timing::clock_config::ClockConfig;

/// Advisory notice raised on every tick that leaves the running side at or
/// below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutNotice {
    pub expired: Color,
    pub winner: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameClock {
    remaining_seconds: [i64; 2],
    increment_seconds: u32,
    running: Option<Color>,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::from_config(&ClockConfig::default())
    }
}

impl GameClock {
    /// Fresh clock with both sides at the configured budget and nothing running.
    pub fn from_config(config: &ClockConfig) -> Self {
        let initial = config.initial_seconds();
        Self {
            remaining_seconds: [initial, initial],
            increment_seconds: config.increment_seconds,
            running: None,
        }
    }

    /// Starts `color`'s timer and stops the other one.
    #[inline]
    pub fn start(&mut self, color: Color) {
        self.running = Some(color);
    }

    pub fn on_tick(&mut self) -> Option<TimeoutNotice> {
        let color = self.running?;
        let remaining = &mut self.remaining_seconds[color.index()];
        *remaining -= 1;

        if *remaining <= 0 {
            Some(TimeoutNotice {
                expired: color,
                winner: color.opposite(),
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn remaining(&self, color: Color) -> i64 {
        self.remaining_seconds[color.index()]
    }

    #[inline]
    pub fn running(&self) -> Option<Color> {
        self.running
    }

    #[inline]
    pub fn increment_seconds(&self) -> u32 {
        self.increment_seconds
    }

    /// `mm:ss`, with a leading `-` once a side has run past zero.
    pub fn format_remaining(&self, color: Color) -> String {
        let remaining = self.remaining(color);
        let sign = if remaining < 0 { "-" } else { "" };
        let abs = remaining.unsigned_abs();
        format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameClock, TimeoutNotice};
    use crate::game_state::chess_types::Color;
    use crate::timing::clock_config::ClockConfig;

    #[test]
    fn idle_clock_ignores_ticks() {
        let mut clock = GameClock::from_config(&ClockConfig::new(1, 0));
        assert_eq!(clock.on_tick(), None);
        assert_eq!(clock.remaining(Color::White), 60);
        assert_eq!(clock.remaining(Color::Black), 60);
    }

    #[test]
    fn only_the_running_side_counts_down() {
        let mut clock = GameClock::from_config(&ClockConfig::new(1, 0));
        clock.start(Color::White);
        clock.on_tick();
        clock.on_tick();
        clock.start(Color::Black);
        clock.on_tick();

        assert_eq!(clock.remaining(Color::White), 58);
        assert_eq!(clock.remaining(Color::Black), 59);
        assert_eq!(clock.running(), Some(Color::Black));
    }

    #[test]
    fn last_second_raises_timeout_for_opponent_and_keeps_counting() {
        let mut clock = GameClock::from_config(&ClockConfig::new(1, 0));
        clock.start(Color::Black);
        for _ in 0..59 {
            assert_eq!(clock.on_tick(), None);
        }
        assert_eq!(clock.remaining(Color::Black), 1);

        let expected = Some(TimeoutNotice {
            expired: Color::Black,
            winner: Color::White,
        });
        assert_eq!(clock.on_tick(), expected);
        assert_eq!(clock.remaining(Color::Black), 0);

        assert_eq!(clock.on_tick(), expected);
        assert_eq!(clock.remaining(Color::Black), -1);
        assert_eq!(clock.format_remaining(Color::Black), "-00:01");
    }

    #[test]
    fn increment_is_stored_but_not_applied() {
        let mut clock = GameClock::from_config(&ClockConfig::new(2, 30));
        assert_eq!(clock.increment_seconds(), 30);
        clock.start(Color::White);
        clock.on_tick();
        clock.start(Color::Black);
        assert_eq!(clock.remaining(Color::White), 119);
        assert_eq!(clock.format_remaining(Color::White), "01:59");
    }
}
