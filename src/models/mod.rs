pub mod authors;
pub mod posts;

use serde::Serialize;
use uuid::Uuid;

use crate::features::Pagination;

/// Envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Set on listings scoped to a single author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Uuid>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub results: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            author: None,
            page: pagination.page,
            limit: pagination.limit,
            total,
            total_pages: pagination.total_pages(total),
            results: data.len(),
            data,
        }
    }

    pub fn for_author(mut self, author_id: Uuid) -> Self {
        self.author = Some(author_id);
        self
    }
}
