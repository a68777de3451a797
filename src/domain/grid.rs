//! Day-grid generation for a month view.
//!
//! A grid is the run of consecutive days shown for one month, padded at both
//! ends with days from the neighbouring months so that every row is a full
//! week starting on the configured weekday. The only exception is at the
//! edges of chrono's date range, where unrepresentable fill days are dropped.

use crate::domain::DateRange;
use crate::entities::{CalendarConfig, YearMonth};
use chrono::{Datelike, NaiveDate, Weekday};

/// Cell count of the fixed six-row layout.
pub const SIX_ROW_CELLS: u32 = 42;

/// Column of `date` in a week that starts on `week_starts_on`, in `0..=6`.
pub fn weekday_offset(date: NaiveDate, week_starts_on: Weekday) -> u32 {
    let native = date.weekday().num_days_from_sunday();
    let start = week_starts_on.num_days_from_sunday();

    (if native < start { 7 } else { 0 }) + native - start
}

/// The span of days covered by the grid for `month`.
///
/// Fill days that fall outside chrono's representable range are left out, so
/// the grids of the first and last representable months are clipped at
/// `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn grid_range(month: YearMonth, week_starts_on: Weekday, force_six_rows: bool) -> DateRange {
    let first_of_month = month.first_day();
    let last_of_month = month.last_day();
    let first_day_column = weekday_offset(first_of_month, week_starts_on);
    let days_in_month = month.days_in_month();

    let total_cells = if force_six_rows {
        SIX_ROW_CELLS
    } else {
        let last_day_column = weekday_offset(last_of_month, week_starts_on);
        days_in_month + first_day_column + (6 - last_day_column)
    };
    let trailing_days = total_cells - first_day_column - days_in_month;

    let grid_start = first_of_month
        .checked_sub_signed(chrono::Duration::days(i64::from(first_day_column)))
        .unwrap_or(NaiveDate::MIN);
    let grid_end = last_of_month
        .checked_add_signed(chrono::Duration::days(i64::from(trailing_days)))
        .unwrap_or(NaiveDate::MAX);

    DateRange::new(grid_start, grid_end)
}

/// Ordered cell dates for `month` under the config's week start and row policy.
pub fn build_grid(month: YearMonth, config: &CalendarConfig) -> Vec<NaiveDate> {
    grid_range(month, config.week_starts_on, config.force_six_rows)
        .days()
        .collect()
}

/// Same as [`build_grid`] for the month containing `date`.
pub fn build_grid_for_date(date: NaiveDate, config: &CalendarConfig) -> Vec<NaiveDate> {
    build_grid(YearMonth::of(date), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config(week_starts_on: Weekday, force_six_rows: bool) -> CalendarConfig {
        CalendarConfig::new(date(2024, 1, 1))
            .with_week_start(week_starts_on)
            .with_six_rows(force_six_rows)
    }

    fn every_month() -> impl Iterator<Item = YearMonth> {
        (1999..=2030).flat_map(|year| (1..=12).map(move |m| YearMonth::new(year, m).unwrap()))
    }

    #[test]
    fn test_weekday_offset_stays_in_week() {
        // 2024-02-04 is a Sunday
        let sunday = date(2024, 2, 4);
        assert_eq!(weekday_offset(sunday, Weekday::Sun), 0);
        assert_eq!(weekday_offset(sunday, Weekday::Mon), 6);
        assert_eq!(weekday_offset(sunday, Weekday::Sat), 1);

        for start in ALL_WEEKDAYS {
            for offset in 0..7 {
                assert!(weekday_offset(sunday + chrono::Duration::days(offset), start) < 7);
            }
        }
    }

    #[test]
    fn test_february_2024_monday_start() {
        let grid = build_grid(YearMonth::new(2024, 2).unwrap(), &config(Weekday::Mon, false));

        assert_eq!(grid.len(), 35);
        assert_eq!(grid.first(), Some(&date(2024, 1, 29)));
        assert_eq!(grid.last(), Some(&date(2024, 3, 3)));
        assert_eq!(grid[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_february_2024_six_rows() {
        let grid = build_grid(YearMonth::new(2024, 2).unwrap(), &config(Weekday::Mon, true));

        assert_eq!(grid.len(), 42);
        assert_eq!(grid.first(), Some(&date(2024, 1, 29)));
        assert_eq!(grid.last(), Some(&date(2024, 3, 10)));
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_lead_days() {
        // 2015-02-01 is a Sunday and February 2015 has exactly four weeks
        let grid = build_grid(YearMonth::new(2015, 2).unwrap(), &config(Weekday::Sun, false));

        assert_eq!(grid.len(), 28);
        assert_eq!(grid.first(), Some(&date(2015, 2, 1)));
        assert_eq!(grid.last(), Some(&date(2015, 2, 28)));
    }

    #[test]
    fn test_grid_for_date_ignores_day_of_month() {
        let config = config(Weekday::Mon, false);
        assert_eq!(
            build_grid_for_date(date(2024, 2, 17), &config),
            build_grid(YearMonth::new(2024, 2).unwrap(), &config)
        );
    }

    #[test]
    fn test_grid_shape_for_every_month_and_week_start() {
        for month in every_month() {
            for start in ALL_WEEKDAYS {
                let grid = build_grid(month, &config(start, false));

                assert_eq!(grid.len() % 7, 0, "{month} starting {start}");
                assert!(grid.len() <= SIX_ROW_CELLS as usize);
                assert_eq!(grid[0].weekday(), start);

                for pair in grid.windows(2) {
                    assert_eq!(pair[1], pair[0].succ_opt().unwrap());
                }

                let in_month: Vec<_> = grid.iter().filter(|d| month.contains(**d)).collect();
                assert_eq!(in_month.len() as u32, month.days_in_month());
                let unique: HashSet<_> = in_month.iter().collect();
                assert_eq!(unique.len(), in_month.len());

                // Never a full trailing week of fill
                let last_row = &grid[grid.len() - 7..];
                assert!(last_row.iter().any(|d| month.contains(*d)));
            }
        }
    }

    #[test]
    fn test_grid_is_clipped_at_representable_range() {
        let last_month = YearMonth::of(NaiveDate::MAX);
        let first_month = YearMonth::of(NaiveDate::MIN);

        for start in ALL_WEEKDAYS {
            for six_rows in [false, true] {
                let config = config(start, six_rows);

                let grid = build_grid(last_month, &config);
                assert_eq!(grid.last(), Some(&NaiveDate::MAX));
                assert_eq!(grid[0].weekday(), start);
                assert_eq!(
                    grid.iter().filter(|d| last_month.contains(**d)).count() as u32,
                    last_month.days_in_month()
                );

                let grid = build_grid(first_month, &config);
                assert_eq!(grid.first(), Some(&NaiveDate::MIN));
                assert_eq!(
                    grid.iter().filter(|d| first_month.contains(**d)).count() as u32,
                    first_month.days_in_month()
                );

                for pair in grid.windows(2) {
                    assert_eq!(pair[1], pair[0].succ_opt().unwrap());
                }
            }
        }
    }

    #[test]
    fn test_six_rows_always_42_cells() {
        for month in every_month() {
            for start in ALL_WEEKDAYS {
                let grid = build_grid(month, &config(start, true));
                assert_eq!(grid.len(), 42, "{month} starting {start}");
                assert!(grid.contains(&month.first_day()));
                assert!(grid.contains(&month.last_day()));
            }
        }
    }
}
