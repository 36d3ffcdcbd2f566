use thiserror::Error;

/// Ошибка разбора токена из URL или из ответа API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTokenError {
    #[error("unknown shipment status: {0}")]
    UnknownStatus(String),
    #[error("unknown date range: {0}")]
    UnknownDateRange(String),
    #[error("invalid seller id: {0}")]
    InvalidSellerId(String),
    #[error("empty marketplace name")]
    EmptyMarketplaceName,
    #[error("marketplace name contains a comma: {0}")]
    SeparatorInMarketplaceName(String),
    #[error("page size {0} is not allowed")]
    PageSizeNotAllowed(u32),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("unknown resource: {0}")]
    UnknownResource(String),
}
