//! Month selector resolution
//!
//! Queries name their month loosely: an explicit "YYYY-MM", a relative alias,
//! or nothing at all. Resolution is relative to a processing date supplied by
//! the caller. A selector that is none of these names no ledger month, and
//! queries over it see an empty month.

use chrono::NaiveDate;

use crate::models::MonthKey;

/// A parsed month selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthSelector {
    /// The month of the processing date
    Current,
    /// The calendar month before the processing date's month
    Previous,
    /// An explicit month
    Literal(MonthKey),
    /// Anything else, trimmed but otherwise as given
    Unrecognized(String),
}

impl MonthSelector {
    /// Parse a selector string
    ///
    /// Accepts "" (current), "this month"/"current month", "last month"/
    /// "previous month" (any case), or "YYYY-MM". Anything else becomes
    /// [`MonthSelector::Unrecognized`].
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        match trimmed.to_lowercase().as_str() {
            "" | "this month" | "current month" => Self::Current,
            "last month" | "previous month" => Self::Previous,
            _ => match MonthKey::parse(trimmed) {
                Ok(month) => Self::Literal(month),
                Err(_) => Self::Unrecognized(trimmed.to_string()),
            },
        }
    }

    /// Resolve to a concrete month relative to `today`
    ///
    /// `None` for an unrecognized selector.
    pub fn resolve(&self, today: NaiveDate) -> Option<MonthKey> {
        match self {
            Self::Current => Some(MonthKey::from_date(today)),
            Self::Previous => Some(MonthKey::from_date(today).prev()),
            Self::Literal(month) => Some(*month),
            Self::Unrecognized(_) => None,
        }
    }

    /// The month label reported back to the caller
    pub fn label(&self, today: NaiveDate) -> String {
        match self {
            Self::Unrecognized(raw) => raw.clone(),
            _ => self
                .resolve(today)
                .map(|month| month.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resolve_month(selector: &str, today: NaiveDate) -> Option<MonthKey> {
        MonthSelector::parse(selector).resolve(today)
    }

    #[test]
    fn test_empty_is_current_month() {
        let month = resolve_month("", date(2026, 10, 18)).unwrap();
        assert_eq!(month.to_string(), "2026-10");
        assert_eq!(resolve_month("   ", date(2026, 10, 18)).unwrap(), month);
    }

    #[test]
    fn test_aliases_resolve_to_previous_month_any_case() {
        let today = date(2026, 10, 18);
        let last = resolve_month("last month", today).unwrap();
        let previous = resolve_month("Previous Month", today).unwrap();
        let shouted = resolve_month("LAST MONTH", today).unwrap();

        assert_eq!(last.to_string(), "2026-09");
        assert_eq!(last, previous);
        assert_eq!(last, shouted);
    }

    #[test]
    fn test_previous_month_wraps_year() {
        let month = resolve_month("last month", date(2025, 1, 31)).unwrap();
        assert_eq!(month.to_string(), "2024-12");
    }

    #[test]
    fn test_literal_month() {
        let month = resolve_month("2024-01", date(2026, 10, 18)).unwrap();
        assert_eq!(month.to_string(), "2024-01");
    }

    #[test]
    fn test_unrecognized_selector_names_no_month() {
        let today = date(2026, 10, 18);
        for raw in ["sometime", "2024-13", "January", " 2024-1 "] {
            let selector = MonthSelector::parse(raw);
            assert_eq!(selector, MonthSelector::Unrecognized(raw.trim().to_string()));
            assert_eq!(selector.resolve(today), None);
            assert_eq!(selector.label(today), raw.trim());
        }
    }

    #[test]
    fn test_label_of_resolved_selector() {
        let today = date(2026, 10, 18);
        assert_eq!(MonthSelector::parse("").label(today), "2026-10");
        assert_eq!(MonthSelector::parse("last month").label(today), "2026-09");
    }
}
