use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseTokenError;
use crate::shared::query_params::LIST_SEPARATOR;

/// Идентификатор продавца
///
/// В списке продавцов бэкенд отдаёт id строкой (`"3"`), в аккаунтах
/// маркетплейсов и в query-параметрах это число, поэтому десериализация
/// принимает обе формы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SellerId(pub u64);

impl SellerId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for SellerId {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(SellerId)
            .map_err(|_| ParseTokenError::InvalidSellerId(s.to_string()))
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SellerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(SellerId(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Название маркетплейса (`amazon`, `noon`, ...), без пробелов по краям.
/// Запятая запрещена: это разделитель списков в URL и ключах запросов.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MarketplaceName(String);

impl MarketplaceName {
    pub fn new(name: &str) -> Result<Self, ParseTokenError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ParseTokenError::EmptyMarketplaceName);
        }
        if trimmed.contains(LIST_SEPARATOR) {
            return Err(ParseTokenError::SeparatorInMarketplaceName(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MarketplaceName {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarketplaceName::new(s)
    }
}

impl TryFrom<String> for MarketplaceName {
    type Error = ParseTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MarketplaceName::new(&value)
    }
}

impl From<MarketplaceName> for String {
    fn from(value: MarketplaceName) -> Self {
        value.0
    }
}

impl fmt::Display for MarketplaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marketplace {
    pub id: i64,
    pub name: MarketplaceName,
    pub logo_url: Option<String>,
    pub is_active: bool,
}

/// Подключение продавца к маркетплейсу
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceAccount {
    pub id: i64,
    pub seller_id: SellerId,
    pub marketplace_id: i64,
    pub seller_id_in_marketplace: String,
    pub status: String,
    pub fulfillment_model: String,
    pub connection_error: Option<String>,
    pub last_order_sync: Option<String>,
    pub marketplace: Marketplace,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub logo_url: Option<String>,
    pub contact_email: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub marketplace_accounts: Vec<MarketplaceAccount>,
}

impl Seller {
    /// Названия маркетплейсов, к которым подключён продавец
    pub fn marketplace_names(&self) -> impl Iterator<Item = &MarketplaceName> {
        self.marketplace_accounts
            .iter()
            .map(|account| &account.marketplace.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_id_from_str() {
        assert_eq!("42".parse(), Ok(SellerId(42)));
        assert_eq!(" 7 ".parse(), Ok(SellerId(7)));
        assert!("abc".parse::<SellerId>().is_err());
        assert!("-5".parse::<SellerId>().is_err());
        assert!("".parse::<SellerId>().is_err());
    }

    #[test]
    fn test_marketplace_name_trims() {
        let name = MarketplaceName::new("  amazon ").unwrap();
        assert_eq!(name.as_str(), "amazon");
        assert_eq!(
            MarketplaceName::new("   "),
            Err(ParseTokenError::EmptyMarketplaceName)
        );
    }

    #[test]
    fn test_marketplace_name_rejects_list_separator() {
        assert_eq!(
            MarketplaceName::new("a,b"),
            Err(ParseTokenError::SeparatorInMarketplaceName("a,b".to_string()))
        );
        assert!(serde_json::from_str::<MarketplaceName>(r#""noon,ae""#).is_err());
        assert!(MarketplaceName::new("Yandex Market & Co").is_ok());
    }

    #[test]
    fn test_seller_deserializes_string_and_numeric_ids() {
        let json = r#"{
            "id": "3",
            "name": "Acme",
            "isActive": true,
            "marketplaceAccounts": [{
                "id": 11,
                "sellerId": 3,
                "marketplaceId": 1,
                "sellerIdInMarketplace": "A-3",
                "status": "CONNECTED",
                "fulfillmentModel": "FBM",
                "marketplace": { "id": 1, "name": "amazon", "isActive": true }
            }]
        }"#;
        let seller: Seller = serde_json::from_str(json).unwrap();
        assert_eq!(seller.id, SellerId(3));
        assert_eq!(seller.marketplace_accounts[0].seller_id, SellerId(3));
        let names: Vec<&str> = seller.marketplace_names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["amazon"]);
    }

    #[test]
    fn test_seller_without_accounts() {
        let json = r#"{ "id": 5, "name": "Solo", "isActive": false }"#;
        let seller: Seller = serde_json::from_str(json).unwrap();
        assert_eq!(seller.id, SellerId(5));
        assert!(seller.marketplace_accounts.is_empty());
    }
}
