use std::collections::BTreeSet;

use chrono::NaiveDate;
use contracts::domain::a001_seller::aggregate::{MarketplaceName, SellerId};
use contracts::enums::{DateRangeTab, ShipmentStatus};
use contracts::shared::paging::{PageSize, DEFAULT_PAGE};

use super::address_bar::AddressBar;
use super::config::QueryStateConfig;
use super::date_window::{today, DateWindow};
use super::selection::{SelectOption, Selection};
use super::url_binder::{UrlBinder, UrlFilters};

/// Snapshot of the dashboard filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterState {
    sellers: Selection<SellerId>,
    marketplaces: Selection<MarketplaceName>,
    date_window: DateWindow,
    status: Option<ShipmentStatus>,
    page: u32,
    limit: PageSize,
}

impl FilterState {
    pub fn new(config: &QueryStateConfig) -> Self {
        Self {
            sellers: Selection::All,
            marketplaces: Selection::All,
            date_window: DateWindow::Tab(config.default_tab),
            status: None,
            page: DEFAULT_PAGE,
            limit: config.default_limit,
        }
    }

    pub fn selected_seller_ids(&self) -> &Selection<SellerId> {
        &self.sellers
    }

    pub fn selected_marketplace_names(&self) -> &Selection<MarketplaceName> {
        &self.marketplaces
    }

    pub fn date_window(&self) -> DateWindow {
        self.date_window
    }

    pub fn status_filter(&self) -> Option<ShipmentStatus> {
        self.status
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> PageSize {
        self.limit
    }

    /// Seller ids to send to the backend; `None` means "do not filter by
    /// seller", which is not the same as every known seller.
    pub fn resolved_seller_ids(&self) -> Option<&BTreeSet<SellerId>> {
        self.sellers.specific()
    }

    pub fn resolved_marketplace_names(&self) -> Option<&BTreeSet<MarketplaceName>> {
        self.marketplaces.specific()
    }

    pub fn effective_date_range_on(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        self.date_window.effective_range(today)
    }

    pub(crate) fn with_page(&self, page: u32) -> FilterState {
        FilterState {
            page,
            ..self.clone()
        }
    }
}

/// The filter state store: the only place the filter state is mutated.
///
/// Constructing the store hydrates it from the address bar; every setter that
/// changes something writes the new state back with a history replace.
/// Setters return whether the state changed. Invalid arguments are rejected
/// and leave the state as it was.
pub struct FilterStore<A> {
    state: FilterState,
    // tab restored by `clear_custom_date_window`
    last_tab: DateRangeTab,
    binder: UrlBinder<A>,
}

impl<A: AddressBar> FilterStore<A> {
    pub fn new(config: QueryStateConfig, address_bar: A) -> Self {
        let mut store = Self {
            state: FilterState::new(&config),
            last_tab: config.default_tab,
            binder: UrlBinder::new(address_bar, config),
        };
        store.hydrate_from_url();
        store
    }

    /// Applies the address bar to a freshly built store. Runs once, from
    /// `new`, before anyone can read the state; it does not write back.
    fn hydrate_from_url(&mut self) {
        let UrlFilters {
            sellers,
            marketplaces,
            date_window,
            status,
            page,
            limit,
        } = self.binder.hydrate();

        // sellers reset marketplaces, limit resets page
        if let Some(options) = sellers {
            self.apply_sellers(options);
        }
        if let Some(options) = marketplaces {
            self.apply_marketplaces(options);
        }
        if let Some(window) = date_window {
            self.apply_date_window(window);
        }
        self.apply_status(status);
        if let Some(limit) = limit {
            self.apply_limit(limit);
        }
        if let Some(page) = page {
            self.apply_page(page);
        }
        log::debug!("filter state hydrated: {:?}", self.state);
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn address_bar(&self) -> &A {
        self.binder.address_bar()
    }

    pub fn selected_seller_ids(&self) -> &Selection<SellerId> {
        self.state.selected_seller_ids()
    }

    pub fn selected_marketplace_names(&self) -> &Selection<MarketplaceName> {
        self.state.selected_marketplace_names()
    }

    pub fn date_window(&self) -> DateWindow {
        self.state.date_window()
    }

    pub fn status_filter(&self) -> Option<ShipmentStatus> {
        self.state.status_filter()
    }

    pub fn page(&self) -> u32 {
        self.state.page()
    }

    pub fn limit(&self) -> PageSize {
        self.state.limit()
    }

    pub fn resolved_seller_ids(&self) -> Option<&BTreeSet<SellerId>> {
        self.state.resolved_seller_ids()
    }

    /// Recomputed on every call: tab windows move with the calendar.
    pub fn effective_date_range(&self) -> (NaiveDate, NaiveDate) {
        self.state.effective_date_range_on(today())
    }

    /// Always resets the marketplace selection: marketplaces offered by the
    /// old sellers may not exist for the new ones.
    pub fn set_selected_seller_ids<I>(&mut self, options: I) -> bool
    where
        I: IntoIterator<Item = SelectOption<SellerId>>,
    {
        let changed = self.apply_sellers(options);
        self.commit(changed)
    }

    /// Checking marketplaces against the selected sellers is up to the caller
    /// (see `availability`).
    pub fn set_selected_marketplace_names<I>(&mut self, options: I) -> bool
    where
        I: IntoIterator<Item = SelectOption<MarketplaceName>>,
    {
        let changed = self.apply_marketplaces(options);
        self.commit(changed)
    }

    pub fn set_date_window(&mut self, window: DateWindow) -> bool {
        let changed = self.apply_date_window(window);
        self.commit(changed)
    }

    /// Goes back to the tab that was active before the custom window.
    pub fn clear_custom_date_window(&mut self) -> bool {
        if !self.state.date_window.is_custom() {
            return false;
        }
        let changed = self.apply_date_window(DateWindow::Tab(self.last_tab));
        self.commit(changed)
    }

    pub fn set_status_filter(&mut self, status: Option<ShipmentStatus>) -> bool {
        let changed = self.apply_status(status);
        self.commit(changed)
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let changed = self.apply_page(page);
        self.commit(changed)
    }

    /// Sizes outside `ALLOWED_PAGE_SIZES` are rejected. An accepted size
    /// always sends the user back to the first page.
    pub fn set_limit(&mut self, limit: u32) -> bool {
        match PageSize::new(limit) {
            Ok(size) => {
                let changed = self.apply_limit(size);
                self.commit(changed)
            }
            Err(err) => {
                log::warn!("set_limit rejected: {}", err);
                false
            }
        }
    }

    fn commit(&mut self, changed: bool) -> bool {
        if changed {
            self.binder.reflect(&self.state);
        }
        changed
    }

    fn apply_sellers<I>(&mut self, options: I) -> bool
    where
        I: IntoIterator<Item = SelectOption<SellerId>>,
    {
        let sellers = Selection::resolve(&self.state.sellers, options);
        let changed = sellers != self.state.sellers || !self.state.marketplaces.is_all();
        self.state.sellers = sellers;
        self.state.marketplaces = Selection::All;
        changed
    }

    fn apply_marketplaces<I>(&mut self, options: I) -> bool
    where
        I: IntoIterator<Item = SelectOption<MarketplaceName>>,
    {
        let marketplaces = Selection::resolve(&self.state.marketplaces, options);
        replace(&mut self.state.marketplaces, marketplaces)
    }

    fn apply_date_window(&mut self, window: DateWindow) -> bool {
        if !window.is_valid() {
            log::warn!("set_date_window rejected: start is after end in {:?}", window);
            return false;
        }
        if let DateWindow::Tab(tab) = window {
            self.last_tab = tab;
        }
        replace(&mut self.state.date_window, window)
    }

    fn apply_status(&mut self, status: Option<ShipmentStatus>) -> bool {
        replace(&mut self.state.status, status)
    }

    fn apply_page(&mut self, page: u32) -> bool {
        if page < DEFAULT_PAGE {
            log::warn!("set_page rejected: {}", page);
            return false;
        }
        replace(&mut self.state.page, page)
    }

    fn apply_limit(&mut self, limit: PageSize) -> bool {
        let limit_changed = replace(&mut self.state.limit, limit);
        let page_changed = replace(&mut self.state.page, DEFAULT_PAGE);
        limit_changed || page_changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_state::address_bar::MemoryAddressBar;

    fn store(search: &str) -> FilterStore<MemoryAddressBar> {
        FilterStore::new(QueryStateConfig::default(), MemoryAddressBar::new(search))
    }

    fn sellers(ids: &[u64]) -> Vec<SelectOption<SellerId>> {
        ids.iter().map(|id| SelectOption::Item(SellerId(*id))).collect()
    }

    fn marketplaces(names: &[&str]) -> Vec<SelectOption<MarketplaceName>> {
        names
            .iter()
            .map(|name| SelectOption::Item(MarketplaceName::new(name).unwrap()))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn search(store: &FilterStore<MemoryAddressBar>) -> String {
        store.address_bar().search()
    }

    #[test]
    fn test_default_load() {
        let store = store("");
        assert_eq!(store.selected_seller_ids(), &Selection::All);
        assert_eq!(store.selected_marketplace_names(), &Selection::All);
        assert_eq!(store.date_window(), DateWindow::Tab(DateRangeTab::ThirtyDays));
        assert_eq!(store.page(), 1);
        assert_eq!(store.limit(), PageSize::TEN);
        assert_eq!(store.status_filter(), None);
        assert_eq!(store.resolved_seller_ids(), None);
        assert_eq!(
            store.state().effective_date_range_on(date(2024, 6, 15)),
            (date(2024, 5, 16), date(2024, 6, 15))
        );
        assert!(store.address_bar().replacements().is_empty());
    }

    #[test]
    fn test_effective_date_range_uses_today() {
        let store = store("");
        let (start, end) = store.effective_date_range();
        assert_eq!(end, today());
        assert_eq!((end - start).num_days(), 30);
    }

    #[test]
    fn test_custom_range_wins_on_hydrate() {
        let store = store("?dateRange=7days&startDate=2024-01-01&endDate=2024-01-10");
        assert_eq!(
            store.date_window(),
            DateWindow::Custom {
                start: date(2024, 1, 1),
                end: date(2024, 1, 10)
            }
        );
    }

    #[test]
    fn test_malformed_url_recovery() {
        let store = store("?status=bogus&page=-5&sellerIds=3,,7");
        assert_eq!(store.status_filter(), None);
        assert_eq!(store.page(), 1);
        assert_eq!(
            store.selected_seller_ids(),
            &[SellerId(3), SellerId(7)].into_iter().collect::<Selection<_>>()
        );
        // hydration leaves the address bar alone
        assert!(store.address_bar().replacements().is_empty());
    }

    #[test]
    fn test_seller_change_resets_marketplaces() {
        let mut store = store("");
        store.set_selected_seller_ids(sellers(&[3]));
        store.set_selected_marketplace_names(marketplaces(&["amazon"]));
        assert!(!store.selected_marketplace_names().is_all());

        store.set_selected_seller_ids(sellers(&[3, 5]));
        assert_eq!(store.selected_marketplace_names(), &Selection::All);
        assert_eq!(search(&store), "sellerIds=3%2C5");
    }

    #[test]
    fn test_seller_resolution_against_previous() {
        let mut store = store("");
        let mut input = vec![SelectOption::All];
        input.extend(sellers(&[4]));
        store.set_selected_seller_ids(input);
        assert_eq!(
            store.resolved_seller_ids(),
            Some(&[SellerId(4)].into_iter().collect::<BTreeSet<_>>())
        );

        let mut input = sellers(&[4, 9]);
        input.push(SelectOption::All);
        store.set_selected_seller_ids(input);
        assert_eq!(store.selected_seller_ids(), &Selection::All);

        store.set_selected_seller_ids(sellers(&[2]));
        store.set_selected_seller_ids(vec![]);
        assert_eq!(store.selected_seller_ids(), &Selection::All);
        assert_eq!(search(&store), "");
    }

    #[test]
    fn test_marketplaces_keep_sellers() {
        let mut store = store("sellerIds=8");
        store.set_selected_marketplace_names(marketplaces(&["noon", "amazon"]));
        assert_eq!(
            store.resolved_seller_ids(),
            Some(&[SellerId(8)].into_iter().collect::<BTreeSet<_>>())
        );
        assert_eq!(search(&store), "sellerIds=8&marketplaces=amazon%2Cnoon");
    }

    #[test]
    fn test_date_window_exclusivity() {
        let mut store = store("");
        let custom = DateWindow::custom(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        assert!(store.set_date_window(custom));
        assert_eq!(store.date_window().tab(), None);
        assert_eq!(search(&store), "startDate=2024-03-01&endDate=2024-03-31");

        assert!(store.set_date_window(DateWindow::Tab(DateRangeTab::SevenDays)));
        assert!(!store.date_window().is_custom());
        assert_eq!(search(&store), "dateRange=7days");
    }

    #[test]
    fn test_reversed_custom_window_is_rejected() {
        let mut store = store("dateRange=90days");
        let reversed = DateWindow::Custom {
            start: date(2024, 5, 2),
            end: date(2024, 5, 1),
        };
        assert!(!store.set_date_window(reversed));
        assert_eq!(store.date_window(), DateWindow::Tab(DateRangeTab::NinetyDays));
        assert!(store.address_bar().replacements().is_empty());
    }

    #[test]
    fn test_clear_custom_restores_previous_tab() {
        let mut store = store("");
        store.set_date_window(DateWindow::Tab(DateRangeTab::NinetyDays));
        store.set_date_window(DateWindow::custom(date(2024, 1, 1), date(2024, 1, 2)).unwrap());
        assert!(store.clear_custom_date_window());
        assert_eq!(store.date_window(), DateWindow::Tab(DateRangeTab::NinetyDays));

        assert!(!store.clear_custom_date_window());
    }

    #[test]
    fn test_clear_custom_defaults_to_thirty_days() {
        let mut store = store("startDate=2024-01-01&endDate=2024-01-10");
        store.clear_custom_date_window();
        assert_eq!(store.date_window(), DateWindow::Tab(DateRangeTab::ThirtyDays));
        assert_eq!(search(&store), "");
    }

    #[test]
    fn test_limit_change_resets_page() {
        let mut store = store("page=4");
        assert_eq!(store.page(), 4);
        assert!(store.set_limit(25));
        assert_eq!(store.page(), 1);
        assert_eq!(search(&store), "limit=25");

        store.set_page(3);
        assert!(store.set_limit(25));
        assert_eq!(store.page(), 1);
    }

    #[test]
    fn test_disallowed_limit_is_rejected() {
        let mut store = store("page=2");
        assert!(!store.set_limit(15));
        assert!(!store.set_limit(0));
        assert_eq!(store.limit(), PageSize::TEN);
        assert_eq!(store.page(), 2);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let mut store = store("");
        assert!(!store.set_page(0));
        assert!(store.set_page(5));
        assert_eq!(search(&store), "page=5");
        store.set_page(1);
        assert_eq!(search(&store), "");
    }

    #[test]
    fn test_status_filter() {
        let mut store = store("status=DELIVERED");
        assert_eq!(store.status_filter(), Some(ShipmentStatus::Delivered));
        store.set_status_filter(Some(ShipmentStatus::Returned));
        assert_eq!(search(&store), "status=returned");
        store.set_status_filter(None);
        assert_eq!(search(&store), "");
    }

    #[test]
    fn test_reflect_is_idempotent() {
        let mut store = store("active=orders");
        store.set_page(2);
        store.set_page(2);
        store.set_status_filter(Some(ShipmentStatus::Packed));
        store.set_status_filter(Some(ShipmentStatus::Packed));
        assert_eq!(
            store.address_bar().replacements(),
            &[
                "active=orders&page=2".to_string(),
                "active=orders&status=packed&page=2".to_string(),
            ]
        );
    }

    #[test]
    fn test_setters_replace_only_on_change() {
        let mut store = store("");
        assert!(!store.set_page(1));
        assert!(!store.set_status_filter(None));
        assert!(!store.set_selected_marketplace_names(vec![]));
        assert!(!store.set_selected_seller_ids(vec![SelectOption::All]));
        assert!(store.address_bar().replacements().is_empty());
    }

    #[test]
    fn test_url_round_trip() {
        let mut original = store("");
        original.set_selected_seller_ids(sellers(&[12, 3]));
        original.set_selected_marketplace_names(marketplaces(&["Yandex Market", "amazon"]));
        original.set_date_window(DateWindow::custom(date(2024, 2, 1), date(2024, 2, 29)).unwrap());
        original.set_status_filter(Some(ShipmentStatus::Shipped));
        original.set_limit(40);
        original.set_page(6);

        let restored = store(&search(&original));
        assert_eq!(restored.state(), original.state());
    }

    #[test]
    fn test_url_round_trip_with_reserved_characters() {
        let mut original = store("active=a%26b");
        original.set_selected_marketplace_names(marketplaces(&["Noon & Co", "a+b", "50%", "x=y"]));

        let restored = store(&search(&original));
        assert_eq!(restored.state(), original.state());
        assert_eq!(
            restored.selected_marketplace_names().specific().map(|names| names.len()),
            Some(4)
        );
        assert!(search(&original).starts_with("active=a%26b&"));
    }

    #[test]
    fn test_url_round_trip_for_tab_and_defaults() {
        let config = QueryStateConfig::default().with_default_limit(PageSize::TWENTY);
        let mut original = FilterStore::new(config, MemoryAddressBar::new(""));
        original.set_date_window(DateWindow::Tab(DateRangeTab::SevenDays));
        original.set_limit(10);
        assert_eq!(search(&original), "dateRange=7days&limit=10");

        let restored = FilterStore::new(config, MemoryAddressBar::new(&search(&original)));
        assert_eq!(restored.state(), original.state());

        let fresh = FilterStore::new(config, MemoryAddressBar::new(""));
        assert_eq!(fresh.limit(), PageSize::TWENTY);
    }
}
