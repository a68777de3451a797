use crate::entities::YearMonth;
use chrono::{Month, Weekday};
use clap::ValueEnum;

/// Display strings for month and weekday indices.
///
/// Month indices run 0 = January ..= 11 = December; weekday indices are native,
/// 0 = Sunday ..= 6 = Saturday. Out-of-range indices yield an empty string.
pub trait Labels {
    fn month(&self, index: u32) -> &str;
    fn weekday(&self, index: u32) -> &str;
    fn weekday_short(&self, index: u32) -> &str;
}

pub struct EnglishLabels;

impl Labels for EnglishLabels {
    fn month(&self, index: u32) -> &str {
        index
            .checked_add(1)
            .and_then(|number| u8::try_from(number).ok())
            .and_then(|number| Month::try_from(number).ok())
            .map_or("", |month| month.name())
    }

    fn weekday(&self, index: u32) -> &str {
        const DAYS: [&str; 7] = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];
        DAYS.get(index as usize).copied().unwrap_or("")
    }

    fn weekday_short(&self, index: u32) -> &str {
        const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        DAYS.get(index as usize).copied().unwrap_or("")
    }
}

pub struct RussianLabels;

impl Labels for RussianLabels {
    fn month(&self, index: u32) -> &str {
        const MONTHS: [&str; 12] = [
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ];
        MONTHS.get(index as usize).copied().unwrap_or("")
    }

    fn weekday(&self, index: u32) -> &str {
        const DAYS: [&str; 7] = [
            "Воскресенье",
            "Понедельник",
            "Вторник",
            "Среда",
            "Четверг",
            "Пятница",
            "Суббота",
        ];
        DAYS.get(index as usize).copied().unwrap_or("")
    }

    fn weekday_short(&self, index: u32) -> &str {
        const DAYS: [&str; 7] = ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"];
        DAYS.get(index as usize).copied().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn labels(self) -> Box<dyn Labels> {
        match self {
            Locale::En => Box::new(EnglishLabels),
            Locale::Ru => Box::new(RussianLabels),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }
}

/// Short weekday names in grid column order for a week starting on `week_starts_on`.
pub fn column_headers(labels: &dyn Labels, week_starts_on: Weekday) -> Vec<String> {
    let start = week_starts_on.num_days_from_sunday();
    (0..7)
        .map(|column| labels.weekday_short((start + column) % 7).to_string())
        .collect()
}

/// Header title such as "February 2024".
pub fn month_title(labels: &dyn Labels, month: YearMonth) -> String {
    format!("{} {}", labels.month(month.month() - 1), month.year())
}
