use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseTokenError;

/// Статус отправления заказа
///
/// В JSON бэкенда статусы приходят в верхнем регистре (`SHIPPED`),
/// в query-параметрах запросов передаются в нижнем (`shipped`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipmentStatus {
    Created,
    Packed,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl ShipmentStatus {
    /// Токен для query-параметра `status`
    pub fn as_wire(&self) -> &'static str {
        match self {
            ShipmentStatus::Created => "created",
            ShipmentStatus::Packed => "packed",
            ShipmentStatus::Shipped => "shipped",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Cancelled => "cancelled",
            ShipmentStatus::Returned => "returned",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ShipmentStatus::Created => "Created",
            ShipmentStatus::Packed => "Packed",
            ShipmentStatus::Shipped => "Shipped",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Cancelled => "Cancelled",
            ShipmentStatus::Returned => "Returned",
        }
    }

    /// Все статусы в порядке жизненного цикла заказа
    pub fn all() -> [ShipmentStatus; 6] {
        [
            ShipmentStatus::Created,
            ShipmentStatus::Packed,
            ShipmentStatus::Shipped,
            ShipmentStatus::Delivered,
            ShipmentStatus::Cancelled,
            ShipmentStatus::Returned,
        ]
    }
}

impl FromStr for ShipmentStatus {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        ShipmentStatus::all()
            .into_iter()
            .find(|status| status.as_wire().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseTokenError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
