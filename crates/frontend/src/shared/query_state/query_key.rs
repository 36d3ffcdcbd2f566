use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use contracts::error::ParseTokenError;
use contracts::shared::query_params::{
    DATE_FORMAT, DATE_RANGE, END_DATE, LIMIT, LIST_SEPARATOR, MARKETPLACES, PAGE, SELLER_IDS,
    START_DATE, STATUS,
};
use serde::Serialize;

use super::date_window::{today, DateWindow};
use super::store::FilterState;

/// Backend resources whose requests depend on the filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceName {
    Orders,
    OrderStatusCounts,
    Overview,
    Sellers,
}

/// Which filter fields a resource is requested with.
#[derive(Debug, Clone, Copy)]
struct ResourceFields {
    sellers: bool,
    marketplaces: bool,
    date_window: bool,
    status: bool,
    paging: bool,
}

impl ResourceName {
    /// Path under `/api/`
    pub fn path(&self) -> &'static str {
        match self {
            ResourceName::Orders => "orders",
            ResourceName::OrderStatusCounts => "orders/status-counts",
            ResourceName::Overview => "overview",
            ResourceName::Sellers => "sellers",
        }
    }

    pub fn all() -> [ResourceName; 4] {
        [
            ResourceName::Orders,
            ResourceName::OrderStatusCounts,
            ResourceName::Overview,
            ResourceName::Sellers,
        ]
    }

    pub fn is_paged(&self) -> bool {
        self.fields().paging
    }

    fn fields(&self) -> ResourceFields {
        match self {
            ResourceName::Orders => ResourceFields {
                sellers: true,
                marketplaces: true,
                date_window: true,
                status: true,
                paging: true,
            },
            // counts do not depend on the page being viewed
            ResourceName::OrderStatusCounts => ResourceFields {
                sellers: true,
                marketplaces: true,
                date_window: true,
                status: false,
                paging: false,
            },
            ResourceName::Overview => ResourceFields {
                sellers: true,
                marketplaces: false,
                date_window: true,
                status: false,
                paging: false,
            },
            ResourceName::Sellers => ResourceFields {
                sellers: false,
                marketplaces: false,
                date_window: false,
                status: false,
                paging: false,
            },
        }
    }
}

impl FromStr for ResourceName {
    type Err = ParseTokenError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        ResourceName::from_path(path)
    }
}

impl ResourceName {
    /// Resource served at `path`; leading and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Result<Self, ParseTokenError> {
        let path = path.trim_matches('/');
        ResourceName::all()
            .into_iter()
            .find(|resource| resource.path() == path)
            .ok_or_else(|| ParseTokenError::UnknownResource(path.to_string()))
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Cache key of one resource request.
///
/// Parameters are sorted by name and collections are sorted inside their
/// value, so equal filters give equal keys whatever order they were picked in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryKey {
    resource: ResourceName,
    params: Vec<(&'static str, String)>,
}

impl QueryKey {
    pub fn resource(&self) -> ResourceName {
        self.resource
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, name, value)?;
        }
        Ok(())
    }
}

/// Query parameter value as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WireValue {
    Text(String),
    Number(u64),
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Text(text) => f.write_str(text),
            WireValue::Number(n) => write!(f, "{}", n),
        }
    }
}

pub type WireParams = BTreeMap<&'static str, WireValue>;

/// Cache key of `resource` under `state`; reads only the fields the
/// resource is requested with.
pub fn derive_key(resource: ResourceName, state: &FilterState) -> QueryKey {
    let fields = resource.fields();
    let mut params: Vec<(&'static str, String)> = Vec::new();

    if fields.sellers {
        if let Some(tokens) = state.selected_seller_ids().tokens() {
            params.push((SELLER_IDS, tokens.join(LIST_SEPARATOR)));
        }
    }
    if fields.marketplaces {
        if let Some(tokens) = state.selected_marketplace_names().tokens() {
            params.push((MARKETPLACES, tokens.join(LIST_SEPARATOR)));
        }
    }
    if fields.date_window {
        match state.date_window() {
            DateWindow::Tab(tab) => params.push((DATE_RANGE, tab.token().to_string())),
            DateWindow::Custom { start, end } => {
                params.push((START_DATE, format_date(start)));
                params.push((END_DATE, format_date(end)));
            }
        }
    }
    if fields.status {
        if let Some(status) = state.status_filter() {
            params.push((STATUS, status.as_wire().to_string()));
        }
    }
    if fields.paging {
        params.push((PAGE, state.page().to_string()));
        params.push((LIMIT, state.limit().to_string()));
    }

    params.sort();
    QueryKey { resource, params }
}

pub fn neighbour_requests(resource: ResourceName, state: &FilterState) -> Vec<(QueryKey, WireParams)> {
    neighbour_requests_on(resource, state, today())
}

/// Key and wire parameters of the previous and next page, for prefetching.
/// Empty for resources that are not paged.
pub fn neighbour_requests_on(
    resource: ResourceName,
    state: &FilterState,
    today: NaiveDate,
) -> Vec<(QueryKey, WireParams)> {
    if !resource.is_paged() {
        return Vec::new();
    }
    let page = state.page();
    let previous = (page > 1).then(|| page - 1);
    previous
        .into_iter()
        .chain(page.checked_add(1))
        .map(|neighbour| {
            let neighbour = state.with_page(neighbour);
            (
                derive_key(resource, &neighbour),
                to_wire_params_on(resource, &neighbour, today),
            )
        })
        .collect()
}

pub fn to_wire_params(resource: ResourceName, state: &FilterState) -> WireParams {
    to_wire_params_on(resource, state, today())
}

/// Wire parameters of `resource` as of `today`. "All" selections are left
/// out; the date window is always sent as resolved dates.
pub fn to_wire_params_on(resource: ResourceName, state: &FilterState, today: NaiveDate) -> WireParams {
    let fields = resource.fields();
    let mut params = WireParams::new();

    if fields.sellers {
        if let Some(tokens) = state.selected_seller_ids().tokens() {
            params.insert(SELLER_IDS, WireValue::Text(tokens.join(LIST_SEPARATOR)));
        }
    }
    if fields.marketplaces {
        if let Some(tokens) = state.selected_marketplace_names().tokens() {
            params.insert(MARKETPLACES, WireValue::Text(tokens.join(LIST_SEPARATOR)));
        }
    }
    if fields.date_window {
        let (start, end) = state.effective_date_range_on(today);
        params.insert(START_DATE, WireValue::Text(format_date(start)));
        params.insert(END_DATE, WireValue::Text(format_date(end)));
    }
    if fields.status {
        if let Some(status) = state.status_filter() {
            params.insert(STATUS, WireValue::Text(status.as_wire().to_string()));
        }
    }
    if fields.paging {
        params.insert(PAGE, WireValue::Number(u64::from(state.page())));
        params.insert(LIMIT, WireValue::Number(u64::from(state.limit().get())));
    }

    params
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
