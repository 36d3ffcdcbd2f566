use contracts::dashboards::d001_overview::dto::DashboardStats;

use crate::shared::api_utils::fetch_resource;
use crate::shared::query_state::{ResourceName, WireParams};

pub async fn fetch_overview(params: WireParams) -> Result<DashboardStats, String> {
    fetch_resource(ResourceName::Overview, params).await
}
