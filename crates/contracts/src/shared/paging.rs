use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseTokenError;

/// Размеры страницы, которые предлагает таблица
pub const ALLOWED_PAGE_SIZES: [u32; 6] = [10, 20, 25, 30, 40, 50];

/// Страницы нумеруются с единицы
pub const DEFAULT_PAGE: u32 = 1;

/// Размер страницы из `ALLOWED_PAGE_SIZES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    pub const TEN: PageSize = PageSize(10);
    pub const TWENTY: PageSize = PageSize(20);

    pub fn new(size: u32) -> Result<Self, ParseTokenError> {
        if ALLOWED_PAGE_SIZES.contains(&size) {
            Ok(Self(size))
        } else {
            Err(ParseTokenError::PageSizeNotAllowed(size))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = PageSize> {
        ALLOWED_PAGE_SIZES.into_iter().map(PageSize)
    }

    /// Разбор значения query-параметра `limit`
    pub fn parse(token: &str) -> Result<Self, ParseTokenError> {
        let size = token
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseTokenError::InvalidNumber(token.to_string()))?;
        Self::new(size)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::TEN
    }
}

impl TryFrom<u32> for PageSize {
    type Error = ParseTokenError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        PageSize::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Разбор значения query-параметра `page`: только положительные целые
pub fn parse_page(token: &str) -> Result<u32, ParseTokenError> {
    match token.trim().parse::<u32>() {
        Ok(page) if page >= DEFAULT_PAGE => Ok(page),
        _ => Err(ParseTokenError::InvalidNumber(token.to_string())),
    }
}
