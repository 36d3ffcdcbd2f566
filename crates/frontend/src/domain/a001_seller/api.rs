use contracts::domain::a001_seller::aggregate::Seller;

use crate::shared::api_utils::fetch_resource;
use crate::shared::query_state::{ResourceName, WireParams};

/// Продавцы вместе с подключёнными аккаунтами маркетплейсов
pub async fn fetch_sellers(params: WireParams) -> Result<Vec<Seller>, String> {
    fetch_resource(ResourceName::Sellers, params).await
}
