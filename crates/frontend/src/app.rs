use crate::dashboards::OverviewSummary;
use crate::domain::a002_order::ui::list::OrdersList;
use crate::shared::query_state::FilterProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Filters are hydrated from the address bar once, before any list renders.
    view! {
        <FilterProvider>
            <OverviewSummary />
            <OrdersList />
        </FilterProvider>
    }
}
