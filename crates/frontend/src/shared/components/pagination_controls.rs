use contracts::shared::paging::PageSize;
use leptos::prelude::*;

use crate::shared::query_state::use_filters;

/// PaginationControls component - page navigation bound to the filter store
///
/// The backend does not report a total, so "next" is enabled while the
/// current page came back full.
#[component]
pub fn PaginationControls(
    /// Whether another page may exist after the current one
    #[prop(into)]
    has_next_page: Signal<bool>,
    /// Called when the pointer reaches a page button, to warm the neighbours
    #[prop(optional)]
    on_prefetch: Option<Callback<()>>,
) -> impl IntoView {
    let filters = use_filters();
    let page = Memo::new(move |_| filters.state().page());
    let limit = Memo::new(move |_| filters.state().limit());
    let prefetch = move |_: leptos::ev::MouseEvent| {
        if let Some(on_prefetch) = on_prefetch {
            on_prefetch.run(());
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| filters.set_page(1)
                disabled=move || page.get() <= 1
                title="First page"
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(previous) = previous_page(page.get_untracked()) {
                        filters.set_page(previous);
                    }
                }
                on:mouseenter=prefetch
                disabled=move || page.get() <= 1
                title="Previous page"
            >
                "‹"
            </button>
            <span class="pagination-info">{move || format!("Page {}", page.get())}</span>
            <button
                class="pagination-btn"
                on:click=move |_| filters.set_page(next_page(page.get_untracked()))
                on:mouseenter=prefetch
                disabled=move || !has_next_page.get()
                title="Next page"
            >
                "›"
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Some(size) = parse_page_size_input(&event_target_value(&ev)) {
                        filters.set_limit(size);
                    }
                }
                prop:value=move || limit.get().to_string()
            >
                {PageSize::all().map(move |size| {
                    view! {
                        <option value={size.to_string()} selected=move || limit.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

fn previous_page(current: u32) -> Option<u32> {
    (current > 1).then(|| current - 1)
}

fn next_page(current: u32) -> u32 {
    current.saturating_add(1)
}

/// Value of the page-size select; the store decides whether the size is allowed.
fn parse_page_size_input(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(size) => Some(size),
        Err(e) => {
            log::warn!("page size is not a number: {}", e);
            None
        }
    }
}
