use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Error)]
pub enum CursorError {
    #[error("page cursor is malformed")]
    Invalid,
}

/// Position in the `(created_at DESC, id DESC)` scan order. Encodes both
/// components, so the token stays resolvable after the record it points at
/// is deleted. Opaque to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    pub created_at: DateTime<Utc>,
    pub id: String,
}

impl PageCursor {
    pub fn new(created_at: DateTime<Utc>, id: impl Into<String>) -> Self {
        Self {
            created_at,
            id: id.into(),
        }
    }

    pub fn encode(&self) -> String {
        // URL-safe alphabet: the token travels in query strings verbatim
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), self.id);
        general_purpose::URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(token.trim())
            .map_err(|_| CursorError::Invalid)?;
        let raw = String::from_utf8(bytes).map_err(|_| CursorError::Invalid)?;
        let (ts, id) = raw.split_once('|').ok_or(CursorError::Invalid)?;
        if id.is_empty() {
            return Err(CursorError::Invalid);
        }
        let created_at = DateTime::parse_from_rfc3339(ts)
            .map_err(|_| CursorError::Invalid)?
            .with_timezone(&Utc);
        Ok(Self {
            created_at,
            id: id.to_string(),
        })
    }
}

/// Clamp a client-requested page size into [1, MAX_PAGE_SIZE]
pub fn clamp_page_size(requested: Option<u64>) -> u64 {
    match requested {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(n) => n.min(MAX_PAGE_SIZE),
    }
}

/// Context string attached to failed list queries: names the composite
/// index the active filter set needs, so the failure message tells the
/// operator exactly what to create.
pub fn index_hint(table: &str, equality_columns: &[&str]) -> String {
    let mut columns: Vec<String> = equality_columns.iter().map(|c| c.to_string()).collect();
    columns.push("created_at DESC".to_string());
    columns.push("id DESC".to_string());
    format!(
        "list query on {} failed; it requires an index on {}({})",
        table,
        table,
        columns.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cursor_roundtrip() {
        let cursor = PageCursor::new(
            Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
            "9f1c2a44-0000-4000-8000-000000000001",
        );
        let token = cursor.encode();
        assert_eq!(PageCursor::decode(&token).unwrap(), cursor);
    }

    #[test]
    fn tampered_cursor_is_rejected() {
        assert!(PageCursor::decode("not base64 at all!").is_err());
        // valid base64, missing separator
        let token = general_purpose::URL_SAFE_NO_PAD.encode(b"2025-03-14T09:26:53Z");
        assert!(PageCursor::decode(&token).is_err());
        // separator present but timestamp is garbage
        let token = general_purpose::URL_SAFE_NO_PAD.encode(b"yesterday|some-id");
        assert!(PageCursor::decode(&token).is_err());
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(10)), 10);
        assert_eq!(clamp_page_size(Some(100_000)), MAX_PAGE_SIZE);
    }

    #[test]
    fn index_hint_names_filters_and_ordering() {
        let hint = index_hint("a004_payment", &["status", "method"]);
        assert!(hint.contains("a004_payment(status, method, created_at DESC, id DESC)"));
    }
}
