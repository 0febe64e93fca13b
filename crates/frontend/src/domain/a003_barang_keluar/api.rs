use contracts::domain::a003_barang_keluar::aggregate::{ExportQuery, ItemOut, NewItemOut};
use contracts::shared::api::{ApiEnvelope, PageResult};

use crate::shared::api_utils::{paged_query, ApiClient, ApiError, Verb};
use crate::shared::search::FetchRequest;

/// `GET /api/items-out`; the outflow list has no keyword search.
pub async fn fetch_page(client: &ApiClient, request: &FetchRequest) -> Result<PageResult<ItemOut>, ApiError> {
    let path = format!(
        "/api/items-out{}",
        paged_query(None, request.page, request.page_size)
    );
    let envelope: ApiEnvelope<Vec<ItemOut>> = client.get_json(&path).await?;
    Ok(envelope.into())
}

pub async fn create(client: &ApiClient, request: &NewItemOut) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .send_json(Verb::Post, "/api/items-out", request)
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/api/items-out/{}", id)).await
}

/// `GET /api/items-out/by-employee` for the BEND 29 export.
pub async fn fetch_by_employee(client: &ApiClient, query: &ExportQuery) -> Result<Vec<ItemOut>, ApiError> {
    let path = format!(
        "/api/items-out/by-employee?start_date={}&end_date={}&pegawai_id={}",
        urlencoding::encode(&query.start_date),
        urlencoding::encode(&query.end_date),
        query.pegawai_id
    );
    let envelope: ApiEnvelope<Vec<ItemOut>> = client.get_json(&path).await?;
    Ok(envelope.into_data())
}
