use leptos::prelude::*;

use crate::dashboards::d001_overview::api::fetch_overview;
use crate::shared::query_state::{use_resource_data, ResourceName};

/// Карточки обзора; пересчитываются при смене продавцов или периода
#[component]
#[allow(non_snake_case)]
pub fn OverviewSummary() -> impl IntoView {
    let stats = use_resource_data(ResourceName::Overview, fetch_overview).data();

    view! {
        <div class="overview-summary">
            {move || {
                stats.with(|stats| match stats {
                    None => view! { <div class="stat-card">"Loading..."</div> }.into_any(),
                    Some(stats) => {
                        let trend_class = if stats.increase_from_yesterday < 0.0 {
                            "stat-card__trend stat-card__trend--down"
                        } else {
                            "stat-card__trend stat-card__trend--up"
                        };
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__label">"Pending orders"</span>
                                <span class="stat-card__value">{stats.pending_orders_count}</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__label">"Active products"</span>
                                <span class="stat-card__value">{stats.active_products}</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__label">"Today's revenue"</span>
                                <span class="stat-card__value">{format!("{:.2}", stats.todays_revenue)}</span>
                                <span class=trend_class>
                                    {format!("{:+.1}%", stats.increase_from_yesterday)}
                                </span>
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
        </div>
    }
}
