//! Response envelope used by every endpoint of the SIMANJA backend.
//!
//! Backend answers look like
//! `{ "code": 200, "message": "...", "data": ..., "pagination": { "totalPages": 3 } }`.
//! Only `data` is guaranteed; the remaining fields depend on the endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
}

impl<T: Default> ApiEnvelope<T> {
    /// Payload, or `T::default()` when the backend omitted `data` (e.g. an empty search).
    pub fn into_data(self) -> T {
        self.data.unwrap_or_default()
    }
}

impl<T> ApiEnvelope<T> {
    pub fn total_pages(&self) -> usize {
        self.pagination.as_ref().map(|p| p.total_pages).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    #[serde(rename = "totalPages", default)]
    pub total_pages: usize,
    #[serde(rename = "currentPage", default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<usize>,
    #[serde(rename = "totalItems", default, skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
}

/// One page of a paged resource, as the list screens consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
        }
    }
}

impl<T> From<ApiEnvelope<Vec<T>>> for PageResult<T> {
    fn from(envelope: ApiEnvelope<Vec<T>>) -> Self {
        let total_pages = envelope.total_pages();
        Self {
            items: envelope.data.unwrap_or_default(),
            total_pages,
        }
    }
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_envelope() {
        let json = r#"{"code":200,"data":[1,2,3],"pagination":{"totalPages":7,"currentPage":2}}"#;
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        let page = PageResult::from(envelope);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 7);
    }

    #[test]
    fn test_missing_data_and_pagination() {
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(envelope.total_pages(), 0);
        assert!(envelope.into_data().is_empty());
    }

    #[test]
    fn test_null_data() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"data":null,"pagination":{"totalPages":0}}"#).unwrap();
        let page = PageResult::from(envelope);
        assert!(page.items.is_empty());
    }
}
