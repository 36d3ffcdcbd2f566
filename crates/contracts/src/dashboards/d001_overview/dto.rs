use serde::{Deserialize, Serialize};

/// Сводные показатели для страницы обзора (`GET overview`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub pending_orders_count: u64,
    pub active_products: u64,
    pub todays_revenue: f64,
    pub increase_from_yesterday: f64,
    #[serde(default)]
    pub revenue_trend: Vec<RevenueTrendItem>,
    #[serde(default)]
    pub top_performers: Vec<TopPerformer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueTrendItem {
    pub date: chrono::NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformer {
    pub id: i64,
    pub name: String,
    pub revenue: f64,
    pub orders: u64,
}
