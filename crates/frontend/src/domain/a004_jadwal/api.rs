use contracts::domain::a004_jadwal::aggregate::{Location, NewSchedule, Pic, Schedule};
use contracts::shared::api::{ApiEnvelope, PageResult};

use crate::shared::api_utils::{paged_query, ApiClient, ApiError, Verb};
use crate::shared::search::FetchRequest;

pub async fn fetch_page(client: &ApiClient, request: &FetchRequest) -> Result<PageResult<Schedule>, ApiError> {
    let path = format!(
        "/api/schedules{}",
        paged_query(None, request.page, request.page_size)
    );
    let envelope: ApiEnvelope<Vec<Schedule>> = client.get_json(&path).await?;
    Ok(envelope.into())
}

/// Every user may be assigned as PIC.
pub async fn fetch_pics(client: &ApiClient) -> Result<Vec<Pic>, ApiError> {
    let envelope: ApiEnvelope<Vec<Pic>> = client.get_json("/api/users").await?;
    Ok(envelope.into_data())
}

pub async fn fetch_locations(client: &ApiClient) -> Result<Vec<Location>, ApiError> {
    let envelope: ApiEnvelope<Vec<Location>> = client.get_json("/api/locations").await?;
    Ok(envelope.into_data())
}

/// `POST /api/schedules` with one element per assignment.
pub async fn create(client: &ApiClient, schedules: &[NewSchedule]) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .send_json(Verb::Post, "/api/schedules", &schedules)
        .await?;
    Ok(())
}
