use crate::application::{CalendarController, Labels, column_headers, month_title};
use crate::entities::{CellViewModel, DateKey, YearMonth};
use serde::Serialize;

/// Everything a renderer needs to draw one frame of the month view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarSnapshot {
    pub title: String,
    pub month: YearMonth,
    pub column_headers: Vec<String>,
    pub selected: Option<DateKey>,
    /// Previous-month control should be disabled
    pub at_min_bound: bool,
    /// Next-month control should be disabled
    pub at_max_bound: bool,
    pub cells: Vec<CellViewModel>,
}

impl CalendarSnapshot {
    pub fn capture(controller: &CalendarController, labels: &dyn Labels) -> Self {
        let month = controller.reference_month();

        Self {
            title: month_title(labels, month),
            month,
            column_headers: column_headers(labels, controller.config().week_starts_on),
            selected: controller.selected_date().map(DateKey::from),
            at_min_bound: controller.is_at_min_bound(),
            at_max_bound: controller.is_at_max_bound(),
            cells: controller.cells(),
        }
    }
}
