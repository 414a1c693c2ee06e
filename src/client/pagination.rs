//! SCIM pagination
//!
//! SCIM list endpoints page with a 1-based `startIndex` and a page size. The
//! collector below walks pages sequentially, advancing by the number of
//! resources each page actually returned, and stops once the next start index
//! passes the `totalResults` reported by the latest page.

use std::future::Future;

use log::debug;

use super::models::ListResponse;
use crate::error::Result;

/// First index of a SCIM result set
pub const FIRST_START_INDEX: usize = 1;

/// Page request parameters for a SCIM list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScimPageParams {
    /// 1-based index of the first resource on the page
    pub start_index: usize,
    /// Number of resources requested
    pub count: usize,
}

impl ScimPageParams {
    pub fn new(start_index: usize, count: usize) -> Self {
        Self { start_index, count }
    }

    /// Query string pairs. The page size goes out both as the vendor's
    /// `itemsPerPage` and the RFC 7644 `count`.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startIndex", self.start_index.to_string()),
            ("itemsPerPage", self.count.to_string()),
            ("count", self.count.to_string()),
        ]
    }
}

/// Fetch every page of a SCIM list and concatenate the resources.
///
/// Pages are requested in order, advancing `startIndex` by the number of
/// resources received, until `startIndex > totalResults` of the most recent
/// response. A server may return fewer resources than requested. A page with no
/// resources also ends the walk. The first failing page aborts the whole
/// fetch and nothing gathered so far is returned.
pub async fn fetch_all_scim<T, F, Fut>(page_size: usize, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(ScimPageParams) -> Fut,
    Fut: Future<Output = Result<ListResponse<T>>>,
{
    let page_size = page_size.max(1);
    let mut all = Vec::new();
    let mut start_index = FIRST_START_INDEX;

    loop {
        let params = ScimPageParams::new(start_index, page_size);
        debug!("Fetching SCIM page startIndex={} count={}", start_index, page_size);

        let page = fetch_page(params).await?;
        let received = page.resources.len();
        debug!(
            "SCIM page returned {} resources, totalResults={}",
            received, page.total_results
        );

        all.extend(page.resources);
        start_index += received;

        if start_index > page.total_results || received == 0 {
            break;
        }
    }

    debug!("Total SCIM resources fetched: {}", all.len());
    Ok(all)
}
