//! Centralized application configuration loaded from environment variables.

use std::env;

use crate::error::AppError;
use crate::game::store::{DEFAULT_SPOT_COUNT, DEFAULT_STARTING_TURNS};

/// Centralized application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Board configuration; defaults match the tutorial numbers
    pub spot_count: usize,
    pub starting_turns: i32,
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = match env::var("BACKEND_HOST") {
            Ok(host) => host,
            Err(env::VarError::NotPresent) => "0.0.0.0".to_string(),
            // a set but non-unicode value is a broken environment, not a default
            Err(e) => return Err(e.into()),
        };

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{}'",
                port_str
            ))
        })?;

        let spot_count = parse_positive(
            "GAME_SPOT_COUNT",
            env::var("GAME_SPOT_COUNT").ok().as_deref(),
            DEFAULT_SPOT_COUNT as i64,
        )? as usize;

        let starting_turns = parse_positive(
            "GAME_STARTING_TURNS",
            env::var("GAME_STARTING_TURNS").ok().as_deref(),
            DEFAULT_STARTING_TURNS as i64,
        )? as i32;

        Ok(Self {
            host,
            port,
            spot_count,
            starting_turns,
        })
    }
}

/// Parse an optional env value as a strictly positive integer.
///
/// Values are bounded to `i32::MAX` so the result fits every consumer
/// without a truncating cast.
fn parse_positive(name: &str, raw: Option<&str>, default: i64) -> Result<i64, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw.parse::<i64>().map_err(|_| {
        AppError::config(format!("{name} must be an integer, got '{raw}'"))
    })?;
    if value < 1 || value > i64::from(i32::MAX) {
        return Err(AppError::config(format!(
            "{name} must be between 1 and {}, got {value}",
            i32::MAX
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_falls_back_to_default() {
        assert_eq!(parse_positive("GAME_SPOT_COUNT", None, 9).unwrap(), 9);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(parse_positive("GAME_SPOT_COUNT", Some("nine"), 9).is_err());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(parse_positive("GAME_STARTING_TURNS", Some("0"), 3).is_err());
        assert!(parse_positive("GAME_STARTING_TURNS", Some("-3"), 3).is_err());
    }

    #[test]
    fn rejects_values_beyond_i32() {
        // 4294967299 used to truncate to 3 through an `as i32` cast
        assert!(parse_positive("GAME_STARTING_TURNS", Some("4294967299"), 3).is_err());
        assert!(parse_positive("GAME_SPOT_COUNT", Some(&i64::MAX.to_string()), 9).is_err());
    }

    #[test]
    fn accepts_override() {
        assert_eq!(parse_positive("GAME_SPOT_COUNT", Some("16"), 9).unwrap(), 16);
    }
}
