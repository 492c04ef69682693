//! Clock configuration supplied once by the shell at game start.
//!
//! Values arrive already validated; the engine only converts them. Shells that
//! speak in name/value pairs can use `set_option`.

use crate::chess_errors::{ChessErrors, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub initial_minutes: u32,
    /// Accepted and exposed, but never added to either side's remaining time.
    pub increment_seconds: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial_minutes: 10,
            increment_seconds: 5,
        }
    }
}

impl ClockConfig {
    pub fn new(initial_minutes: u32, increment_seconds: u32) -> Self {
        Self {
            initial_minutes,
            increment_seconds,
        }
    }

    #[inline]
    pub fn initial_seconds(&self) -> i64 {
        i64::from(self.initial_minutes) * 60
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let parse = |value: &str| {
            value.trim().parse::<u32>().map_err(|_| {
                ChessErrors::InvalidOptionValue((name.to_owned(), value.to_owned()))
            })
        };

        match name.to_ascii_lowercase().as_str() {
            "initialminutes" | "minutes" => self.initial_minutes = parse(value)?,
            "increment" | "incrementseconds" => self.increment_seconds = parse(value)?,
            _ => return Err(ChessErrors::UnknownOption(name.to_owned())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ClockConfig;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn initial_seconds_converts_minutes() {
        assert_eq!(ClockConfig::new(3, 2).initial_seconds(), 180);
        assert_eq!(ClockConfig::default().initial_seconds(), 600);
    }

    #[test]
    fn set_option_updates_named_fields() {
        let mut config = ClockConfig::default();
        config
            .set_option("InitialMinutes", "5")
            .expect("minutes should parse");
        config
            .set_option("Increment", " 3 ")
            .expect("increment should parse");
        assert_eq!(config, ClockConfig::new(5, 3));
    }

    #[test]
    fn set_option_rejects_bad_input() {
        let mut config = ClockConfig::default();
        assert_eq!(
            config.set_option("Hash", "64"),
            Err(ChessErrors::UnknownOption("Hash".to_owned()))
        );
        assert_eq!(
            config.set_option("Increment", "-1"),
            Err(ChessErrors::InvalidOptionValue((
                "Increment".to_owned(),
                "-1".to_owned()
            )))
        );
        assert_eq!(config, ClockConfig::default());
    }
}
