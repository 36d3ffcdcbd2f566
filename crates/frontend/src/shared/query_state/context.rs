use std::future::Future;
use std::pin::Pin;

use contracts::domain::a001_seller::aggregate::{MarketplaceName, SellerId};
use contracts::enums::ShipmentStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::address_bar::BrowserAddressBar;
use super::config::QueryStateConfig;
use super::date_window::DateWindow;
use super::latest::{LatestRequests, PrefetchCache};
use super::query_key::{derive_key, neighbour_requests, to_wire_params, QueryKey, ResourceName, WireParams};
use super::selection::SelectOption;
use super::store::{FilterState, FilterStore};

/// Filter store of the running page, shared through the Leptos context.
///
/// Readers subscribe through [`FilterContext::state`] or a memoised
/// [`FilterContext::query_key`]; they are notified only after a setter has
/// finished and actually changed something.
#[derive(Clone, Copy)]
pub struct FilterContext {
    store: RwSignal<FilterStore<BrowserAddressBar>>,
}

impl FilterContext {
    /// Builds the store, which hydrates from the address bar right away.
    pub fn new(config: QueryStateConfig) -> Self {
        Self {
            store: RwSignal::new(FilterStore::new(config, BrowserAddressBar)),
        }
    }

    pub fn state(&self) -> FilterState {
        self.store.with(|store| store.state().clone())
    }

    pub fn state_untracked(&self) -> FilterState {
        self.store.with_untracked(|store| store.state().clone())
    }

    pub fn set_selected_seller_ids(&self, options: Vec<SelectOption<SellerId>>) {
        self.store
            .maybe_update(|store| store.set_selected_seller_ids(options));
    }

    pub fn set_selected_marketplace_names(&self, options: Vec<SelectOption<MarketplaceName>>) {
        self.store
            .maybe_update(|store| store.set_selected_marketplace_names(options));
    }

    pub fn set_date_window(&self, window: DateWindow) {
        self.store.maybe_update(|store| store.set_date_window(window));
    }

    pub fn clear_custom_date_window(&self) {
        self.store.maybe_update(|store| store.clear_custom_date_window());
    }

    pub fn set_status_filter(&self, status: Option<ShipmentStatus>) {
        self.store.maybe_update(|store| store.set_status_filter(status));
    }

    pub fn set_page(&self, page: u32) {
        self.store.maybe_update(|store| store.set_page(page));
    }

    pub fn set_limit(&self, limit: u32) {
        self.store.maybe_update(|store| store.set_limit(limit));
    }

    /// Changes only when the key of `resource` changes.
    pub fn query_key(&self, resource: ResourceName) -> Memo<QueryKey> {
        let store = self.store;
        Memo::new(move |_| store.with(|store| derive_key(resource, store.state())))
    }

    /// Same as [`query_key`](Self::query_key) for an API path. An unknown path
    /// is a wiring bug and panics.
    pub fn query_key_for_path(&self, path: &str) -> Memo<QueryKey> {
        let resource = ResourceName::from_path(path)
            .unwrap_or_else(|err| panic!("query key requested for {}", err));
        self.query_key(resource)
    }

    pub fn wire_params(&self, resource: ResourceName) -> WireParams {
        self.store
            .with_untracked(|store| to_wire_params(resource, store.state()))
    }

    /// Keys and wire params of the pages around the current one.
    pub fn neighbour_requests(&self, resource: ResourceName) -> Vec<(QueryKey, WireParams)> {
        self.store
            .with_untracked(|store| neighbour_requests(resource, store.state()))
    }
}

/// Installs the [`FilterContext`] for its children.
#[component]
pub fn FilterProvider(
    /// Page defaults; `QueryStateConfig::default()` when omitted
    #[prop(optional)]
    config: Option<QueryStateConfig>,
    children: Children,
) -> impl IntoView {
    provide_context(FilterContext::new(config.unwrap_or_default()));

    children()
}

pub fn use_filters() -> FilterContext {
    use_context::<FilterContext>().expect("FilterContext not found. Wrap your app with FilterProvider.")
}

/// Memoised query key of the resource served at `path`.
pub fn use_query_key_for_path(path: &str) -> Memo<QueryKey> {
    use_filters().query_key_for_path(path)
}

type Fetcher<T> = Box<dyn Fn(WireParams) -> Pin<Box<dyn Future<Output = Result<T, String>>>>>;

/// Data of one resource kept in step with the filters, see [`use_resource_data`].
pub struct ResourceData<T: 'static> {
    resource: ResourceName,
    data: ReadSignal<Option<T>>,
    filters: FilterContext,
    prefetched: StoredValue<PrefetchCache<T>, LocalStorage>,
    fetch: StoredValue<Fetcher<T>, LocalStorage>,
}

impl<T: 'static> Clone for ResourceData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ResourceData<T> {}

impl<T: Send + Sync + 'static> ResourceData<T> {
    pub fn data(&self) -> ReadSignal<Option<T>> {
        self.data
    }

    /// Fetches the pages next to the current one so that paging lands on a
    /// ready response. Non-paged resources have no neighbours.
    pub fn prefetch_neighbours(&self) {
        let prefetched = self.prefetched;
        for (key, params) in self.filters.neighbour_requests(self.resource) {
            if !prefetched.try_update_value(|cache| cache.begin(&key)).unwrap_or(false) {
                continue;
            }
            let Some(request) = self.fetch.try_with_value(|fetch| fetch(params)) else {
                return;
            };
            spawn_local(async move {
                match request.await {
                    Ok(value) => {
                        prefetched.try_update_value(|cache| cache.complete(key, value));
                    }
                    Err(err) => {
                        log::debug!("prefetch of {} failed: {}", key, err);
                        prefetched.try_update_value(|cache| cache.fail(&key));
                    }
                }
            });
        }
    }
}

/// Fetches `resource` whenever its query key changes. A response that
/// arrives after the key has moved on is dropped; a prefetched response for
/// the new key is used instead of a request.
pub fn use_resource_data<T, F, Fut>(resource: ResourceName, fetch: F) -> ResourceData<T>
where
    T: Send + Sync + 'static,
    F: Fn(WireParams) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let filters = use_filters();
    let key = filters.query_key(resource);
    let (data, set_data) = signal(None::<T>);
    let latest = StoredValue::new_local(LatestRequests::new());
    let prefetched = StoredValue::new_local(PrefetchCache::<T>::new());
    let fetch: Fetcher<T> = Box::new(move |params| Box::pin(fetch(params)));
    let fetch = StoredValue::new_local(fetch);

    Effect::new(move |_| {
        let key = key.get();
        let Some(ticket) = latest.try_update_value(|latest| latest.issue(key.clone())) else {
            return;
        };
        if let Some(value) = prefetched.try_update_value(|cache| cache.take(&key)).flatten() {
            log::debug!("serving {} from prefetch", key);
            set_data.set(Some(value));
            return;
        }
        let Some(request) = fetch.try_with_value(|fetch| fetch(filters.wire_params(resource))) else {
            return;
        };

        spawn_local(async move {
            let result = request.await;
            if !latest.try_with_value(|latest| latest.accepts(&ticket)).unwrap_or(false) {
                log::debug!("dropping stale response for {}", ticket.key());
                return;
            }
            match result {
                Ok(value) => set_data.set(Some(value)),
                Err(err) => log::warn!("{} failed: {}", ticket.key(), err),
            }
        });
    });

    ResourceData {
        resource,
        data,
        filters,
        prefetched,
        fetch,
    }
}
