//! Names of the query parameters shared by the address bar and the REST API.

use chrono::NaiveDate;

use crate::error::ParseTokenError;

pub const SELLER_IDS: &str = "sellerIds";
pub const MARKETPLACES: &str = "marketplaces";
pub const DATE_RANGE: &str = "dateRange";
pub const START_DATE: &str = "startDate";
pub const END_DATE: &str = "endDate";
pub const STATUS: &str = "status";
pub const PAGE: &str = "page";
pub const LIMIT: &str = "limit";

/// Every parameter owned by the filter state, in the order they are written.
pub const FILTER_PARAMS: [&str; 8] = [
    SELLER_IDS,
    MARKETPLACES,
    DATE_RANGE,
    START_DATE,
    END_DATE,
    STATUS,
    PAGE,
    LIMIT,
];

/// Sentinel tokens for "no filter" in multi-selects
pub const ALL_SELLERS: &str = "all-sellers";
pub const ALL_MARKETPLACES: &str = "all-marketplaces";

/// Separates the tokens of a multi-select value
pub const LIST_SEPARATOR: &str = ",";

/// Calendar dates travel as `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(token: &str) -> Result<NaiveDate, ParseTokenError> {
    NaiveDate::parse_from_str(token.trim(), DATE_FORMAT)
        .map_err(|_| ParseTokenError::InvalidDate(token.to_string()))
}
