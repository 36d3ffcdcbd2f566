use contracts::domain::a002_order::aggregate::{total_count, OrderStatusCount};
use contracts::enums::ShipmentStatus;
use leptos::prelude::*;

use crate::shared::query_state::use_filters;

/// Status chips with per-status counts; "All" clears the status filter.
#[component]
pub fn StatusFilterBar(
    /// Counts for the current seller, marketplace and date filters
    #[prop(into)]
    counts: Signal<Option<Vec<OrderStatusCount>>>,
) -> impl IntoView {
    let filters = use_filters();
    let selected = Memo::new(move |_| filters.state().status_filter());

    let count_of = move |status: ShipmentStatus| {
        counts.with(|counts| {
            counts
                .iter()
                .flatten()
                .find(|c| c.status == status)
                .map(|c| c.count)
                .unwrap_or(0)
        })
    };

    view! {
        <div class="status-filter-bar">
            <button
                class="status-chip"
                class:active=move || selected.get().is_none()
                on:click=move |_| filters.set_status_filter(None)
            >
                "All "
                <span class="status-chip__count">
                    {move || counts.with(|c| c.as_deref().map(total_count).unwrap_or(0))}
                </span>
            </button>
            {ShipmentStatus::all()
                .into_iter()
                .map(move |status| {
                    view! {
                        <button
                            class="status-chip"
                            class:active=move || selected.get() == Some(status)
                            on:click=move |_| filters.set_status_filter(Some(status))
                        >
                            {status.display_name()}
                            " "
                            <span class="status-chip__count">{move || count_of(status)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
