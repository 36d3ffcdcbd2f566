use chrono::{Duration, NaiveDate, Utc};
use contracts::enums::DateRangeTab;

/// Date window of the dashboard: a relative tab or a fixed pair of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateWindow {
    Tab(DateRangeTab),
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Default for DateWindow {
    fn default() -> Self {
        DateWindow::Tab(DateRangeTab::default())
    }
}

impl DateWindow {
    /// `None` when `start` is after `end`.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(DateWindow::Custom { start, end })
    }

    pub fn is_valid(&self) -> bool {
        match self {
            DateWindow::Tab(_) => true,
            DateWindow::Custom { start, end } => start <= end,
        }
    }

    pub fn tab(&self) -> Option<DateRangeTab> {
        match self {
            DateWindow::Tab(tab) => Some(*tab),
            DateWindow::Custom { .. } => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, DateWindow::Custom { .. })
    }

    /// Inclusive `(start, end)` as of `today`. Tabs count back from `today`.
    pub fn effective_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match *self {
            DateWindow::Custom { start, end } => (start, end),
            DateWindow::Tab(tab) => {
                let start = today
                    .checked_sub_signed(Duration::days(tab.days()))
                    .unwrap_or(NaiveDate::MIN);
                (start, today)
            }
        }
    }
}

/// Current calendar date (UTC), read on every call.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
