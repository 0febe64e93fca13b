use contracts::domain::a002_barang::aggregate::{Item, ItemUpdate};
use contracts::shared::api::{ApiEnvelope, PageResult};

use crate::shared::api_utils::{paged_query, ApiClient, ApiError, Verb};
use crate::shared::search::FetchRequest;

/// Upper bound used when a select needs every item.
const ALL_ITEMS_LIMIT: usize = 9999;

/// `GET /api/items` or, with a keyword, `GET /api/items/search`.
pub async fn fetch_page(client: &ApiClient, request: &FetchRequest) -> Result<PageResult<Item>, ApiError> {
    let path = match request.query.as_deref() {
        Some(keyword) => format!(
            "/api/items/search{}",
            paged_query(Some(keyword), request.page, request.page_size)
        ),
        None => format!("/api/items{}", paged_query(None, request.page, request.page_size)),
    };
    let envelope: ApiEnvelope<Vec<Item>> = client.get_json(&path).await?;
    Ok(envelope.into())
}

/// Every item, for the outflow form.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Item>, ApiError> {
    let envelope: ApiEnvelope<Vec<Item>> = client
        .get_json(&format!("/api/items?limit={}", ALL_ITEMS_LIMIT))
        .await?;
    Ok(envelope.into_data())
}

pub async fn update(client: &ApiClient, id: i64, update: &ItemUpdate) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .send_json(Verb::Put, &format!("/api/items/{}", id), update)
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/api/items/{}", id)).await
}
