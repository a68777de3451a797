use crate::application::{CalendarController, CalendarSnapshot, Config, Locale, Step};
use crate::entities::{CalendarConfig, DateKey, YearMonth, weekday_from_index};
use crate::infrastructure::{EventStore, JsonEventFile};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::debug;
use std::collections::HashSet;

/// Per-invocation overrides layered on top of [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    pub month: Option<YearMonth>,
    pub today: Option<NaiveDate>,
    pub selected: Option<NaiveDate>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub week_start: Option<u8>,
    /// `None` keeps the configured row policy
    pub force_six_rows: Option<bool>,
    pub extra_events: Vec<DateKey>,
    pub locale: Option<Locale>,
    pub steps: Vec<Step>,
}

pub struct CalendarApp {
    config: Config,
    store: Box<dyn EventStore>,
}

impl CalendarApp {
    pub fn new() -> Self {
        let config = Config::from_env();
        let store = JsonEventFile::new(config.events_file.clone());
        Self::with_store(config, Box::new(store))
    }

    pub fn with_store(config: Config, store: Box<dyn EventStore>) -> Self {
        Self { config, store }
    }

    /// Builds a controller for `request` without applying its steps.
    pub fn controller(&self, request: &ViewRequest) -> Result<CalendarController> {
        let today = request.today.unwrap_or_else(|| Local::now().date_naive());
        let week_starts_on = match request.week_start {
            Some(index) => weekday_from_index(index)?,
            None => self.config.week_starts_on,
        };

        let mut events = self.store.load()?;
        events.extend(request.extra_events.iter().copied());

        let calendar_config = CalendarConfig::new(today)
            .with_week_start(week_starts_on)
            .with_six_rows(request.force_six_rows.unwrap_or(self.config.force_six_rows))
            .with_min_date(request.min_date)
            .with_max_date(request.max_date)
            .with_events(events);

        let initial_month = request.month.map_or(today, |month| month.first_day());
        let controller = CalendarController::new(initial_month, request.selected, calendar_config)?;

        Ok(controller)
    }

    /// Builds the controller, replays the steps in order, and captures the result.
    pub fn snapshot(&self, request: &ViewRequest) -> Result<CalendarSnapshot> {
        let mut controller = self.controller(request)?;

        for step in &request.steps {
            debug!("Applying step {step:?}");
            step.apply(&mut controller);
        }

        let locale = request.locale.unwrap_or(self.config.locale);
        Ok(CalendarSnapshot::capture(&controller, locale.labels().as_ref()))
    }

    pub fn list_events(&self) -> Result<Vec<DateKey>> {
        let mut events: Vec<DateKey> = self.store.load()?.into_iter().collect();
        events.sort();
        Ok(events)
    }

    /// Returns how many of `keys` were not already stored.
    pub fn add_events(&self, keys: &[DateKey]) -> Result<usize> {
        let mut events = self.store.load()?;
        let added = keys.iter().filter(|key| events.insert(**key)).count();
        if added > 0 {
            self.store.save(&events)?;
        }
        Ok(added)
    }

    /// Returns how many of `keys` were present and removed.
    pub fn remove_events(&self, keys: &[DateKey]) -> Result<usize> {
        let mut events: HashSet<DateKey> = self.store.load()?;
        let removed = keys.iter().filter(|key| events.remove(*key)).count();
        if removed > 0 {
            self.store.save(&events)?;
        }
        Ok(removed)
    }
}

impl Default for CalendarApp {
    fn default() -> Self {
        Self::new()
    }
}
