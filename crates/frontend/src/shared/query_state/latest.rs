use std::collections::{HashMap, HashSet};

use super::query_key::{QueryKey, ResourceName};

/// Handed out when a request starts; checked when its response arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    key: QueryKey,
}

impl RequestTicket {
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

/// Remembers the last key requested per resource so that responses for keys
/// the user has already moved away from are dropped on arrival.
#[derive(Debug, Clone, Default)]
pub struct LatestRequests {
    latest: HashMap<ResourceName, QueryKey>,
}

impl LatestRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as the current request of its resource.
    pub fn issue(&mut self, key: QueryKey) -> RequestTicket {
        self.latest.insert(key.resource(), key.clone());
        RequestTicket { key }
    }

    /// `true` while no other key has been issued for the ticket's resource
    /// since. Re-issuing the same key keeps older tickets valid.
    pub fn accepts(&self, ticket: &RequestTicket) -> bool {
        self.latest.get(&ticket.key.resource()) == Some(&ticket.key)
    }
}

/// Responses fetched ahead of navigation, keyed by the request they answer.
///
/// Only the neighbours of the current page are worth keeping, so taking an
/// entry discards the rest.
#[derive(Debug)]
pub struct PrefetchCache<T> {
    ready: HashMap<QueryKey, T>,
    pending: HashSet<QueryKey>,
}

impl<T> Default for PrefetchCache<T> {
    fn default() -> Self {
        Self {
            ready: HashMap::new(),
            pending: HashSet::new(),
        }
    }
}

impl<T> PrefetchCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as in flight. `false` when it is already cached or being
    /// fetched.
    pub fn begin(&mut self, key: &QueryKey) -> bool {
        if self.ready.contains_key(key) {
            return false;
        }
        self.pending.insert(key.clone())
    }

    pub fn complete(&mut self, key: QueryKey, value: T) {
        if self.pending.remove(&key) {
            self.ready.insert(key, value);
        }
    }

    pub fn fail(&mut self, key: &QueryKey) {
        self.pending.remove(key);
    }

    /// Response for `key`, if it was prefetched. Everything else is dropped.
    pub fn take(&mut self, key: &QueryKey) -> Option<T> {
        let value = self.ready.remove(key);
        self.ready.clear();
        self.pending.clear();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_state::address_bar::MemoryAddressBar;
    use crate::shared::query_state::config::QueryStateConfig;
    use crate::shared::query_state::query_key::derive_key;
    use crate::shared::query_state::store::FilterStore;

    fn key(resource: ResourceName, search: &str) -> QueryKey {
        let store = FilterStore::new(QueryStateConfig::default(), MemoryAddressBar::new(search));
        derive_key(resource, store.state())
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut latest = LatestRequests::new();
        let first = latest.issue(key(ResourceName::Orders, "page=1"));
        let second = latest.issue(key(ResourceName::Orders, "page=2"));
        assert!(!latest.accepts(&first));
        assert!(latest.accepts(&second));
    }

    #[test]
    fn test_resources_are_independent() {
        let mut latest = LatestRequests::new();
        let orders = latest.issue(key(ResourceName::Orders, ""));
        let counts = latest.issue(key(ResourceName::OrderStatusCounts, ""));
        latest.issue(key(ResourceName::Orders, "status=packed"));
        assert!(!latest.accepts(&orders));
        assert!(latest.accepts(&counts));
    }

    #[test]
    fn test_same_key_reissued_stays_valid() {
        let mut latest = LatestRequests::new();
        let first = latest.issue(key(ResourceName::Overview, "dateRange=7days"));
        let again = latest.issue(key(ResourceName::Overview, "dateRange=7days"));
        assert!(latest.accepts(&first));
        assert!(latest.accepts(&again));
    }

    #[test]
    fn test_prefetched_page_is_served_once() {
        let mut cache = PrefetchCache::new();
        let next = key(ResourceName::Orders, "page=2");
        let previous = key(ResourceName::Orders, "page=1");

        assert!(cache.begin(&next));
        assert!(!cache.begin(&next));
        assert!(cache.begin(&previous));
        cache.complete(next.clone(), "second page");
        cache.complete(previous.clone(), "first page");
        assert!(!cache.begin(&next));

        assert_eq!(cache.take(&next), Some("second page"));
        // the other neighbour is stale once the page moved
        assert_eq!(cache.take(&previous), None);
        assert_eq!(cache.take(&next), None);
    }

    #[test]
    fn test_prefetch_finished_after_navigation_is_ignored() {
        let mut cache = PrefetchCache::new();
        let next = key(ResourceName::Orders, "page=2");
        assert!(cache.begin(&next));
        assert_eq!(cache.take(&key(ResourceName::Orders, "status=packed")), None);

        cache.complete(next.clone(), 7);
        assert_eq!(cache.take(&next), None);
    }

    #[test]
    fn test_failed_prefetch_can_be_retried() {
        let mut cache: PrefetchCache<u32> = PrefetchCache::new();
        let next = key(ResourceName::Orders, "page=2");
        assert!(cache.begin(&next));
        cache.fail(&next);
        assert!(cache.begin(&next));
    }
}
