use contracts::domain::a002_order::aggregate::{OrderOverviewResponse, OrderStatusCount};

use crate::shared::api_utils::fetch_resource;
use crate::shared::query_state::{ResourceName, WireParams};

/// Страница заказов по текущим фильтрам
pub async fn fetch_orders(params: WireParams) -> Result<OrderOverviewResponse, String> {
    fetch_resource(ResourceName::Orders, params).await
}

/// Количество заказов по статусам; фильтр статуса не применяется
pub async fn fetch_status_counts(params: WireParams) -> Result<Vec<OrderStatusCount>, String> {
    fetch_resource(ResourceName::OrderStatusCounts, params).await
}
