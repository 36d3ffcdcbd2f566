//! Two-way binding between [`FilterState`] and the query string.
//!
//! The address bar is read once, while the store is constructed
//! ([`UrlBinder::hydrate`]), and written after every mutation
//! ([`UrlBinder::reflect`]). Nothing listens to the address bar, so a write
//! can never trigger another write.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use contracts::domain::a001_seller::aggregate::{MarketplaceName, SellerId};
use contracts::enums::{DateRangeTab, ShipmentStatus};
use contracts::shared::paging::{parse_page, PageSize, DEFAULT_PAGE};
use contracts::shared::query_params::{self, DATE_FORMAT, FILTER_PARAMS, LIST_SEPARATOR};
use serde::{Deserialize, Deserializer, Serialize};

use super::address_bar::AddressBar;
use super::config::QueryStateConfig;
use super::date_window::DateWindow;
use super::selection::{SelectOption, SelectionKey};
use super::store::FilterState;

/// Filter fields recovered from a query string. `None` means "not present
/// or unusable", so the store keeps its default for that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlFilters {
    pub sellers: Option<Vec<SelectOption<SellerId>>>,
    pub marketplaces: Option<Vec<SelectOption<MarketplaceName>>>,
    pub date_window: Option<DateWindow>,
    pub status: Option<ShipmentStatus>,
    pub page: Option<u32>,
    pub limit: Option<PageSize>,
}

/// Filter parameters as raw query-string values, in the order they are
/// written. Field names match `FILTER_PARAMS`.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct FilterQuery {
    #[serde(rename = "sellerIds", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    seller_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    marketplaces: Option<String>,
    #[serde(rename = "dateRange", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    date_range: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    limit: Option<String>,
}

/// A repeated or nested filter parameter is dropped on its own instead of
/// failing the whole query string.
fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)
        .map_err(|err| log::debug!("ignoring query value: {}", err))
        .ok()
        .flatten())
}

pub struct UrlBinder<A> {
    address_bar: A,
    config: QueryStateConfig,
}

impl<A: AddressBar> UrlBinder<A> {
    pub fn new(address_bar: A, config: QueryStateConfig) -> Self {
        Self {
            address_bar,
            config,
        }
    }

    pub fn address_bar(&self) -> &A {
        &self.address_bar
    }

    /// Reads the filter fields from the current query string.
    pub fn hydrate(&self) -> UrlFilters {
        parse_filters(&self.address_bar.search())
    }

    /// Writes `state` into the query string, replacing the current history
    /// entry. Returns `false` when the query string is already up to date.
    pub fn reflect(&mut self, state: &FilterState) -> bool {
        let current = self.address_bar.search();
        let next = merge_query(&current, &encode_filters(state, &self.config));
        if next == current {
            return false;
        }
        log::debug!("query state: ?{}", next);
        self.address_bar.replace_search(&next);
        true
    }
}

/// Parses the filter parameters of `search` (with or without the leading `?`).
/// Bad values are dropped one by one; the rest still loads.
pub fn parse_filters(search: &str) -> UrlFilters {
    let query: FilterQuery = match serde_qs::from_str(search.trim_start_matches('?')) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("query string ignored: {}", err);
            return UrlFilters::default();
        }
    };

    let custom = match (
        query.start_date.as_deref().map(parse_date),
        query.end_date.as_deref().map(parse_date),
    ) {
        (Some(Some(start)), Some(Some(end))) => DateWindow::custom(start, end),
        _ => None,
    };
    let date_window = custom.or_else(|| {
        query.date_range.as_deref().and_then(|token| {
            token
                .parse::<DateRangeTab>()
                .map(DateWindow::Tab)
                .map_err(|err| log::debug!("ignoring dateRange: {}", err))
                .ok()
        })
    });

    UrlFilters {
        sellers: query.seller_ids.as_deref().map(parse_list::<SellerId>),
        marketplaces: query.marketplaces.as_deref().map(parse_list::<MarketplaceName>),
        date_window,
        status: query.status.as_deref().and_then(|token| {
            token
                .parse::<ShipmentStatus>()
                .map_err(|err| log::debug!("ignoring status: {}", err))
                .ok()
        }),
        page: query.page.as_deref().and_then(|token| {
            parse_page(token)
                .map_err(|err| log::debug!("ignoring page: {}", err))
                .ok()
        }),
        limit: query.limit.as_deref().and_then(|token| {
            PageSize::parse(token)
                .map_err(|err| log::debug!("ignoring limit: {}", err))
                .ok()
        }),
    }
}

/// Query string of every non-default field of `state`, in `FILTER_PARAMS`
/// order.
pub fn encode_filters(state: &FilterState, config: &QueryStateConfig) -> String {
    let mut query = FilterQuery {
        seller_ids: state.selected_seller_ids().tokens().map(join_list),
        marketplaces: state.selected_marketplace_names().tokens().map(join_list),
        status: state.status_filter().map(|status| status.as_wire().to_string()),
        ..FilterQuery::default()
    };
    match state.date_window() {
        DateWindow::Tab(tab) => {
            if tab != config.default_tab {
                query.date_range = Some(tab.token().to_string());
            }
        }
        DateWindow::Custom { start, end } => {
            query.start_date = Some(start.format(DATE_FORMAT).to_string());
            query.end_date = Some(end.format(DATE_FORMAT).to_string());
        }
    }
    if state.page() != DEFAULT_PAGE {
        query.page = Some(state.page().to_string());
    }
    if state.limit() != config.default_limit {
        query.limit = Some(state.limit().to_string());
    }

    serde_qs::to_string(&query).unwrap_or_default()
}

/// Keeps the parameters of `current` that the filter state does not own and
/// appends the `owned` query string after them.
pub fn merge_query(current: &str, owned: &str) -> String {
    let mut foreign: BTreeMap<String, String> =
        match serde_qs::from_str(current.trim_start_matches('?')) {
            Ok(params) => params,
            Err(err) => {
                log::debug!("dropping unreadable query params: {}", err);
                BTreeMap::new()
            }
        };
    foreign.retain(|name, _| !FILTER_PARAMS.contains(&name.as_str()));
    let foreign = serde_qs::to_string(&foreign).unwrap_or_default();

    [foreign.as_str(), owned]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("&")
}

/// Sorted tokens joined into one list value; tokens never contain the
/// separator.
fn join_list(tokens: Vec<String>) -> String {
    tokens.join(LIST_SEPARATOR)
}

fn parse_list<T: SelectionKey>(value: &str) -> Vec<SelectOption<T>> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match SelectOption::parse(token) {
            Ok(option) => Some(option),
            Err(err) => {
                log::debug!("dropping list token {:?}: {}", token, err);
                None
            }
        })
        .collect()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    query_params::parse_date(value)
        .map_err(|err| log::debug!("ignoring {}", err))
        .ok()
}
