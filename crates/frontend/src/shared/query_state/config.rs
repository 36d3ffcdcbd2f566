use contracts::enums::DateRangeTab;
use contracts::shared::paging::PageSize;
use serde::{Deserialize, Serialize};

/// Per-page defaults of the filter state.
///
/// Fields equal to their default are left out of the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryStateConfig {
    pub default_limit: PageSize,
    pub default_tab: DateRangeTab,
}

impl Default for QueryStateConfig {
    fn default() -> Self {
        Self {
            default_limit: PageSize::TEN,
            default_tab: DateRangeTab::ThirtyDays,
        }
    }
}

impl QueryStateConfig {
    pub fn with_default_limit(mut self, limit: PageSize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_default_tab(mut self, tab: DateRangeTab) -> Self {
        self.default_tab = tab;
        self
    }
}
