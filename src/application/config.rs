use crate::application::Locale;
use crate::entities::weekday_from_index;
use chrono::Weekday;
use log::warn;
use std::path::PathBuf;

pub struct Config {
    pub data_dir: PathBuf,
    pub events_file: PathBuf,
    pub week_starts_on: Weekday,
    pub force_six_rows: bool,
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; unset or invalid
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("MONTHGRID_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("monthgrid")
            });

        let events_file = lookup("MONTHGRID_EVENTS")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("events.json"));

        let week_starts_on = match lookup("MONTHGRID_WEEK_START") {
            Some(raw) => match raw.trim().parse::<u8>().map(weekday_from_index) {
                Ok(Ok(weekday)) => weekday,
                _ => {
                    warn!("Ignoring MONTHGRID_WEEK_START={raw:?}: expected 0 (Sunday) to 6 (Saturday)");
                    Weekday::Mon
                }
            },
            None => Weekday::Mon,
        };

        let force_six_rows = match lookup("MONTHGRID_SIX_ROWS") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("Ignoring MONTHGRID_SIX_ROWS={raw:?}: expected a boolean");
                false
            }),
            None => false,
        };

        let locale = match lookup("MONTHGRID_LOCALE") {
            Some(raw) => Locale::from_code(&raw).unwrap_or_else(|| {
                warn!("Ignoring MONTHGRID_LOCALE={raw:?}: expected 'en' or 'ru'");
                Locale::default()
            }),
            None => Locale::default(),
        };

        Self {
            data_dir,
            events_file,
            week_starts_on,
            force_six_rows,
            locale,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
