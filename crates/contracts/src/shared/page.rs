use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated list response.
///
/// `next_cursor` is an opaque server token pointing at the last record of
/// this page; passing it back as `cursor` resumes the scan strictly after
/// that record. It stays valid even if the record it points at is later
/// deleted. `None` when the page came back empty.
///
/// Whether more pages exist is decided by the caller: a page holding
/// exactly `page_size` records is treated as a possible continuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}
