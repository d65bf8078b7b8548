//! Billing period handling - month-name ordering and the current period.
//!
//! Billing periods are identified by an English month name plus a calendar
//! year, exactly as the app has always persisted them. Ordering maps the
//! month name through a fixed twelve-entry list; an unrecognized name gets
//! index −1 and therefore groups before January of the same year.

use chrono::{Datelike, Local};

/// The twelve calendar month names, in order, as persisted on disk.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Index of `month` in the calendar (0 = January, 11 = December),
/// or −1 for a name that is not a calendar month.
#[must_use]
pub fn month_index(month: &str) -> i32 {
    MONTHS
        .iter()
        .position(|m| *m == month)
        .map_or(-1, |i| i32::try_from(i).unwrap_or(-1))
}

/// Sort key for descending-recency ordering of (year, month) records.
#[must_use]
pub(crate) fn period_key(month: &str, year: i32) -> (i32, i32) {
    (year, month_index(month))
}

/// A (month name, year) pair identifying which calendar month a utility or
/// payment record covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillingPeriod {
    /// English month name (e.g., "June")
    pub month: String,
    /// Calendar year
    pub year: i32,
}

impl BillingPeriod {
    /// Creates a billing period from its parts.
    #[must_use]
    pub fn new(month: impl Into<String>, year: i32) -> Self {
        Self {
            month: month.into(),
            year,
        }
    }

    /// The billing period of the device's current local date.
    #[must_use]
    pub fn current() -> Self {
        let now = Local::now();
        Self {
            month: MONTHS[now.month0() as usize].to_string(),
            year: now.year(),
        }
    }

    /// Whether a record's (month, year) falls in this period.
    #[must_use]
    pub fn matches(&self, month: &str, year: i32) -> bool {
        self.month == month && self.year == year
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
