//! API utilities for frontend-backend communication
//!
//! Builds resource URLs from wire parameters and performs the GET requests.

use serde::de::DeserializeOwned;

use crate::shared::query_state::{ResourceName, WireParams};

/// Get the base URL for API requests
///
/// The API is served from the same origin as the dashboard, under `/api`.
///
/// # Returns
/// - API base URL like "https://example.com/api"
/// - "/api" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api".to_string(),
    };
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    format!("{}/api", origin)
}

/// Path and query string of a resource request, relative to [`api_base`]
///
/// # Example
/// `orders?limit=10&page=2&status=shipped`
pub fn resource_path_with_query(resource: ResourceName, params: &WireParams) -> String {
    if params.is_empty() {
        return resource.path().to_string();
    }
    let query = serde_qs::to_string(params).unwrap_or_default();
    format!("{}?{}", resource.path(), query)
}

/// GET a resource and decode its JSON body
pub async fn fetch_resource<T: DeserializeOwned>(
    resource: ResourceName,
    params: WireParams,
) -> Result<T, String> {
    use gloo_net::http::Request;

    let url = format!("{}/{}", api_base(), resource_path_with_query(resource, &params));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_state::WireValue;

    #[test]
    fn test_path_without_params() {
        assert_eq!(
            resource_path_with_query(ResourceName::Sellers, &WireParams::new()),
            "sellers"
        );
    }

    #[test]
    fn test_path_with_sorted_params() {
        let mut params = WireParams::new();
        params.insert("status", WireValue::Text("shipped".into()));
        params.insert("page", WireValue::Number(2));
        params.insert("sellerIds", WireValue::Text("3,5".into()));

        assert_eq!(
            resource_path_with_query(ResourceName::OrderStatusCounts, &params),
            "orders/status-counts?page=2&sellerIds=3%2C5&status=shipped"
        );
    }
}
