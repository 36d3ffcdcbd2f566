use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ShipmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub listing_id: i64,
    pub quantity: i32,
    pub price: f64,
    pub marketplace_item_id: String,
}

/// Заказ в списке заказов
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOverview {
    pub id: i64,
    pub order_id_in_marketplace: String,
    pub order_date: DateTime<Utc>,
    pub order_status: ShipmentStatus,
    pub marketplace: String,
    pub fulfillment_model: String,
    pub total_amount: f64,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub tracking_number: Option<String>,
}

/// Ответ `GET orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOverviewResponse {
    pub orders: Vec<OrderOverview>,
    pub page: u32,
    pub limit: u32,
}

impl OrderOverviewResponse {
    /// Бэкенд не отдаёт общее количество, поэтому следующая страница
    /// считается существующей, если текущая заполнена целиком.
    pub fn has_next_page(&self) -> bool {
        self.limit > 0 && self.orders.len() as u32 >= self.limit
    }
}

/// Элемент ответа `GET orders/status-counts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusCount {
    pub status: ShipmentStatus,
    pub count: u64,
}

pub fn total_count(counts: &[OrderStatusCount]) -> u64 {
    counts.iter().map(|c| c.count).sum()
}
