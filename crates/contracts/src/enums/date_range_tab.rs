use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseTokenError;

/// Быстрый выбор периода: последние 7 / 30 / 90 дней
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DateRangeTab {
    #[serde(rename = "7days")]
    SevenDays,
    #[default]
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "90days")]
    NinetyDays,
}

impl DateRangeTab {
    /// Количество дней, отсчитываемых назад от сегодняшней даты
    pub fn days(&self) -> i64 {
        match self {
            DateRangeTab::SevenDays => 7,
            DateRangeTab::ThirtyDays => 30,
            DateRangeTab::NinetyDays => 90,
        }
    }

    /// Значение query-параметра `dateRange`
    pub fn token(&self) -> &'static str {
        match self {
            DateRangeTab::SevenDays => "7days",
            DateRangeTab::ThirtyDays => "30days",
            DateRangeTab::NinetyDays => "90days",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangeTab::SevenDays => "Last 7 days",
            DateRangeTab::ThirtyDays => "Last 30 days",
            DateRangeTab::NinetyDays => "Last 90 days",
        }
    }

    pub fn all() -> [DateRangeTab; 3] {
        [
            DateRangeTab::SevenDays,
            DateRangeTab::ThirtyDays,
            DateRangeTab::NinetyDays,
        ]
    }
}

impl FromStr for DateRangeTab {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7days" => Ok(DateRangeTab::SevenDays),
            "30days" => Ok(DateRangeTab::ThirtyDays),
            "90days" => Ok(DateRangeTab::NinetyDays),
            other => Err(ParseTokenError::UnknownDateRange(other.to_string())),
        }
    }
}

impl fmt::Display for DateRangeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        for tab in DateRangeTab::all() {
            assert_eq!(tab.token().parse(), Ok(tab));
        }
        assert_eq!(DateRangeTab::default(), DateRangeTab::ThirtyDays);
    }

    #[test]
    fn test_unknown_token() {
        assert!("14days".parse::<DateRangeTab>().is_err());
        assert!("7DAYS".parse::<DateRangeTab>().is_err());
    }

    #[test]
    fn test_serde_matches_token() {
        let json = serde_json::to_string(&DateRangeTab::NinetyDays).unwrap();
        assert_eq!(json, "\"90days\"");
    }
}
