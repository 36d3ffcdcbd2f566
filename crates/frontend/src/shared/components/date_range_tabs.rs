use contracts::enums::DateRangeTab;
use contracts::shared::query_params::{parse_date, DATE_FORMAT};
use leptos::prelude::*;

use crate::shared::date_utils::format_range;
use crate::shared::query_state::date_window::today;
use crate::shared::query_state::{use_filters, DateWindow};

/// Preset date tabs plus a custom start/end range.
///
/// While a custom range is active no tab is highlighted; "Clear" brings back
/// the tab that was active before.
#[component]
pub fn DateRangeTabs() -> impl IntoView {
    let filters = use_filters();
    let window = Memo::new(move |_| filters.state().date_window());

    let (custom_start, set_custom_start) = signal(String::new());
    let (custom_end, set_custom_end) = signal(String::new());

    Effect::new(move |_| {
        if let DateWindow::Custom { start, end } = window.get() {
            set_custom_start.set(start.format(DATE_FORMAT).to_string());
            set_custom_end.set(end.format(DATE_FORMAT).to_string());
        }
    });

    let apply_custom = move |_: leptos::ev::MouseEvent| {
        let start = parse_date(&custom_start.get_untracked());
        let end = parse_date(&custom_end.get_untracked());
        match (start, end) {
            (Ok(start), Ok(end)) => match DateWindow::custom(start, end) {
                Some(range) => filters.set_date_window(range),
                None => log::warn!("custom range starts after it ends: {} > {}", start, end),
            },
            _ => log::debug!("custom range needs both dates"),
        }
    };

    view! {
        <div class="date-range-tabs">
            {DateRangeTab::all()
                .into_iter()
                .map(move |tab| {
                    view! {
                        <button
                            class="date-range-tab"
                            class:active=move || window.get() == DateWindow::Tab(tab)
                            on:click=move |_| filters.set_date_window(DateWindow::Tab(tab))
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
            <div class="date-range-custom">
                <input
                    type="date"
                    prop:value=move || custom_start.get()
                    on:input=move |ev| set_custom_start.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || custom_end.get()
                    on:input=move |ev| set_custom_end.set(event_target_value(&ev))
                />
                <button class="date-range-apply" on:click=apply_custom>
                    "Apply"
                </button>
                <Show when=move || window.get().is_custom()>
                    <button
                        class="date-range-clear"
                        on:click=move |_| {
                            set_custom_start.set(String::new());
                            set_custom_end.set(String::new());
                            filters.clear_custom_date_window();
                        }
                    >
                        "Clear"
                    </button>
                </Show>
            </div>
            <span class="date-range-summary">
                {move || {
                    let (start, end) = window.get().effective_range(today());
                    format_range(start, end)
                }}
            </span>
        </div>
    }
}
