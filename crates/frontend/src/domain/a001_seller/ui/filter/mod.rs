use contracts::domain::a001_seller::aggregate::{MarketplaceName, Seller, SellerId};
use leptos::prelude::*;

use crate::shared::query_state::availability::MarketplaceAvailability;
use crate::shared::query_state::{use_filters, SelectOption};

/// Multi-select of sellers. Checking "All sellers" clears the explicit set;
/// checking a seller while "All" is on narrows to that seller.
#[component]
#[allow(non_snake_case)]
pub fn SellerFilter(#[prop(into)] sellers: Signal<Vec<Seller>>) -> impl IntoView {
    let filters = use_filters();
    let selection = Memo::new(move |_| filters.state().selected_seller_ids().clone());

    let toggle = move |option: SelectOption<SellerId>| {
        let options = selection.get_untracked().toggled(option);
        filters.set_selected_seller_ids(options);
    };

    view! {
        <div class="seller-filter">
            <label class="filter-option">
                <input
                    type="checkbox"
                    prop:checked=move || selection.get().is_all()
                    on:change=move |_| toggle(SelectOption::All)
                />
                "All sellers"
            </label>
            <For
                each=move || sellers.get()
                key=|seller: &Seller| seller.id
                children=move |seller: Seller| {
                    let id = seller.id;
                    view! {
                        <label class="filter-option">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    selection.get().specific().is_some_and(|ids| ids.contains(&id))
                                }
                                on:change=move |_| toggle(SelectOption::Item(id))
                            />
                            {seller.name}
                        </label>
                    }
                }
            />
        </div>
    }
}

/// Multi-select of the marketplaces the selected sellers are connected to.
#[component]
#[allow(non_snake_case)]
pub fn MarketplaceFilter(#[prop(into)] sellers: Signal<Vec<Seller>>) -> impl IntoView {
    let filters = use_filters();
    let availability = Memo::new(move |_| sellers.with(|s| MarketplaceAvailability::from_sellers(s)));
    let selection = Memo::new(move |_| filters.state().selected_marketplace_names().clone());
    let offered = Memo::new(move |_| {
        let state = filters.state();
        availability.with(|a| a.available_for(state.selected_seller_ids()))
    });

    let toggle = move |option: SelectOption<MarketplaceName>| {
        let state = filters.state_untracked();
        let current = availability.with_untracked(|a| {
            a.restrict(state.selected_marketplace_names(), state.selected_seller_ids())
        });
        filters.set_selected_marketplace_names(current.toggled(option));
    };

    view! {
        <div class="marketplace-filter">
            <label class="filter-option">
                <input
                    type="checkbox"
                    prop:checked=move || selection.get().is_all()
                    on:change=move |_| toggle(SelectOption::All)
                />
                "All marketplaces"
            </label>
            <For
                each=move || offered.get()
                key=|name: &MarketplaceName| name.clone()
                children=move |name: MarketplaceName| {
                    let label = name.to_string();
                    let checked_name = name.clone();
                    view! {
                        <label class="filter-option">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    selection
                                        .get()
                                        .specific()
                                        .is_some_and(|names| names.contains(&checked_name))
                                }
                                on:change=move |_| toggle(SelectOption::Item(name.clone()))
                            />
                            {label}
                        </label>
                    }
                }
            />
        </div>
    }
}
