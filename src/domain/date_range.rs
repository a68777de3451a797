use chrono::NaiveDate;

/// An inclusive run of calendar days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let end = self.end;
        // Every offset up to `end` is representable, so the additions cannot overflow
        (0..=(end - start).num_days()).map(move |i| start + chrono::Duration::days(i))
    }
}
