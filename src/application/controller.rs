use crate::domain::{build_grid, weekday_offset};
use crate::entities::{CalendarConfig, CalendarError, CellViewModel, DateKey, NavigationState, YearMonth};
use chrono::{Datelike, NaiveDate};
use log::{debug, trace, warn};

/// Month view state: which month is displayed and which event day is selected.
pub struct CalendarController {
    config: CalendarConfig,
    state: NavigationState,
}

impl CalendarController {
    /// Builds the controller for the month containing `initial_month`.
    ///
    /// The initial month is clamped into the configured bounds, and an initial
    /// selection is only kept when it falls on an event day.
    pub fn new(
        initial_month: NaiveDate,
        selected_date: Option<NaiveDate>,
        config: CalendarConfig,
    ) -> Result<Self, CalendarError> {
        let min = config.min_month();
        let max = config.max_month();

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(CalendarError::InvalidBounds { min, max });
            }
        }

        let requested = YearMonth::of(initial_month);
        let mut reference_month = requested;
        if let Some(min) = min {
            reference_month = reference_month.max(min);
        }
        if let Some(max) = max {
            reference_month = reference_month.min(max);
        }
        if reference_month != requested {
            debug!("Initial month {} clamped to {}", requested, reference_month);
        }

        let selected_date = selected_date.filter(|date| {
            let has_event = config.has_event(*date);
            if !has_event {
                warn!("Ignoring initial selection {}: no event on that day", DateKey::from(*date));
            }
            has_event
        });

        Ok(Self {
            config,
            state: NavigationState {
                reference_month,
                selected_date,
            },
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn reference_month(&self) -> YearMonth {
        self.state.reference_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.state.selected_date
    }

    /// Classified cells for the displayed month, in grid order.
    pub fn cells(&self) -> Vec<CellViewModel> {
        let month = self.state.reference_month;

        build_grid(month, &self.config)
            .into_iter()
            .map(|date| self.classify(date, month))
            .collect()
    }

    /// [`cells`](Self::cells) split into week rows, each starting at column 0.
    pub fn weeks(&self) -> Vec<Vec<CellViewModel>> {
        let mut weeks: Vec<Vec<CellViewModel>> = Vec::new();

        for cell in self.cells() {
            match weeks.last_mut() {
                Some(week) if cell.column_index != 0 => week.push(cell),
                _ => weeks.push(vec![cell]),
            }
        }

        weeks
    }

    fn classify(&self, date: NaiveDate, month: YearMonth) -> CellViewModel {
        let cell_month = YearMonth::of(date);

        CellViewModel {
            date,
            key: DateKey::from(date),
            day_of_month: date.day(),
            column_index: weekday_offset(date, self.config.week_starts_on),
            is_today: date == self.config.today,
            is_previous_month: cell_month < month,
            is_next_month: cell_month > month,
            has_event: self.config.has_event(date),
            is_selected: self.state.selected_date == Some(date),
        }
    }

    pub fn is_at_min_bound(&self) -> bool {
        self.config.min_month() == Some(self.state.reference_month)
    }

    pub fn is_at_max_bound(&self) -> bool {
        self.config.max_month() == Some(self.state.reference_month)
    }

    pub fn go_to_previous_month(&mut self) {
        if self.is_at_min_bound() {
            trace!("Already at minimum month {}", self.state.reference_month);
            return;
        }

        if let Some(previous) = self.state.reference_month.pred() {
            debug!("Navigating {} -> {}", self.state.reference_month, previous);
            self.state.reference_month = previous;
        }
    }

    pub fn go_to_next_month(&mut self) {
        if self.is_at_max_bound() {
            trace!("Already at maximum month {}", self.state.reference_month);
            return;
        }

        if let Some(next) = self.state.reference_month.succ() {
            debug!("Navigating {} -> {}", self.state.reference_month, next);
            self.state.reference_month = next;
        }
    }

    /// Deselects `date` if it is selected, otherwise selects it when it has an event.
    pub fn toggle_select(&mut self, date: NaiveDate) {
        if self.state.selected_date == Some(date) {
            debug!("Deselected {}", DateKey::from(date));
            self.state.selected_date = None;
            return;
        }

        if self.config.has_event(date) {
            debug!("Selected {}", DateKey::from(date));
            self.state.selected_date = Some(date);
        } else {
            trace!("Ignoring selection of {}: no event", DateKey::from(date));
        }
    }
}
