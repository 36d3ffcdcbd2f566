use contracts::domain::a001_seller::aggregate::SellerId;
use contracts::domain::a002_order::aggregate::OrderOverview;
use leptos::prelude::*;

use crate::domain::a001_seller::api::fetch_sellers;
use crate::domain::a001_seller::ui::filter::{MarketplaceFilter, SellerFilter};
use crate::domain::a002_order::api::{fetch_orders, fetch_status_counts};
use crate::shared::components::date_range_tabs::DateRangeTabs;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_filter_bar::StatusFilterBar;
use crate::shared::date_utils::format_timestamp;
use crate::shared::query_state::availability::visible_sellers;
use crate::shared::query_state::{use_resource_data, ResourceName};

/// Orders page: filter toolbar, status chips, order rows and paging.
#[component]
#[allow(non_snake_case)]
pub fn OrdersList(
    /// Sellers the user may see; empty means all of them
    #[prop(optional)]
    allowed_sellers: Vec<SellerId>,
) -> impl IntoView {
    let sellers_data = use_resource_data(ResourceName::Sellers, fetch_sellers).data();
    let orders = use_resource_data(ResourceName::Orders, fetch_orders);
    let orders_data = orders.data();
    let counts_data = use_resource_data(ResourceName::OrderStatusCounts, fetch_status_counts).data();

    let sellers = Signal::derive(move || {
        sellers_data.with(|data| {
            data.as_deref()
                .map(|all| visible_sellers(all, &allowed_sellers))
                .unwrap_or_default()
        })
    });
    let has_next_page = Signal::derive(move || {
        orders_data.with(|data| data.as_ref().is_some_and(|r| r.has_next_page()))
    });

    view! {
        <div class="orders-page">
            <div class="orders-toolbar">
                <SellerFilter sellers=sellers />
                <MarketplaceFilter sellers=sellers />
                <DateRangeTabs />
            </div>
            <StatusFilterBar counts=counts_data />
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Date"</th>
                        <th>"Marketplace"</th>
                        <th>"Status"</th>
                        <th>"Items"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        orders_data.with(|data| match data {
                            None => view! {
                                <tr><td colspan="6">"Loading..."</td></tr>
                            }.into_any(),
                            Some(response) if response.orders.is_empty() => view! {
                                <tr><td colspan="6">"No orders for the selected filters"</td></tr>
                            }.into_any(),
                            Some(response) => response
                                .orders
                                .iter()
                                .map(order_row)
                                .collect_view()
                                .into_any(),
                        })
                    }}
                </tbody>
            </table>
            <PaginationControls
                has_next_page=has_next_page
                on_prefetch=Callback::new(move |_| orders.prefetch_neighbours())
            />
        </div>
    }
}

fn order_row(order: &OrderOverview) -> impl IntoView {
    view! {
        <tr>
            <td>{order.order_id_in_marketplace.clone()}</td>
            <td>{format_timestamp(order.order_date)}</td>
            <td>{format!("{} ({})", order.marketplace, order.fulfillment_model)}</td>
            <td>{order.order_status.display_name()}</td>
            <td>{order.order_items.iter().map(|item| item.quantity.max(0) as u64).sum::<u64>()}</td>
            <td>{format!("{:.2}", order.total_amount)}</td>
        </tr>
    }
}
