//! Client side of the cursor-paginated feeds.
//!
//! `ListSession` owns everything a list view accumulates between filter
//! changes: the loaded buffer, the resume cursor, the has-more flag and
//! the fetch state machine. It is deliberately free of any network or DOM
//! dependency — components drive it with `begin_fetch` / `apply_page` /
//! `apply_error` around their own HTTP calls, which keeps the whole
//! lifecycle testable on the host target.

use std::collections::HashSet;

/// Implemented by every record type shown in a paged list
pub trait ListRecord {
    fn list_id(&self) -> String;
}

/// Fetch state of one list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading { resync: bool },
    Error,
}

/// Handle for one granted fetch. Carries the generation stamp that decides,
/// at completion time, whether the response still belongs to the current
/// filter set; a response from a superseded generation is discarded, never
/// merged.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    pub resync: bool,
    pub cursor: Option<String>,
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct ListSession<T> {
    items: Vec<T>,
    cursor: Option<String>,
    has_more: bool,
    phase: ListPhase,
    generation: u64,
    error: Option<String>,
    page_size: usize,
}

impl<T: ListRecord> ListSession<T> {
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0);
        Self {
            items: Vec::new(),
            cursor: None,
            has_more: false,
            phase: ListPhase::Idle,
            generation: 0,
            error: None,
            page_size,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading { .. })
    }

    /// Heuristic continuation flag: true iff the last page came back with
    /// exactly `page_size` records. When the remaining count is an exact
    /// multiple of the page size this allows one extra, empty fetch that
    /// then settles it to false.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        if self.phase == ListPhase::Error {
            self.phase = ListPhase::Idle;
        }
    }

    /// Ask to start a fetch.
    ///
    /// A non-resync request is refused while any fetch is in flight, and
    /// when the feed is exhausted. A resync request always proceeds: it
    /// bumps the generation so that whatever the superseded fetch returns
    /// later is thrown away (last resync wins).
    pub fn begin_fetch(&mut self, resync: bool) -> Option<FetchTicket> {
        if !resync {
            if self.is_loading() {
                return None;
            }
            if !self.has_more && !self.items.is_empty() {
                return None;
            }
        } else {
            self.generation += 1;
        }

        self.phase = ListPhase::Loading { resync };
        Some(FetchTicket {
            generation: self.generation,
            resync,
            cursor: if resync { None } else { self.cursor.clone() },
            page_size: self.page_size,
        })
    }

    /// Merge one fetched page. Returns false (and changes nothing) when
    /// the ticket belongs to a superseded generation.
    pub fn apply_page(
        &mut self,
        ticket: &FetchTicket,
        page: Vec<T>,
        next_cursor: Option<String>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        let full_page = page.len() == self.page_size;

        if ticket.resync {
            self.items = page;
        } else {
            // Guard the no-duplicate-id invariant even if the server
            // overlaps pages
            let known: HashSet<String> = self.items.iter().map(|i| i.list_id()).collect();
            self.items
                .extend(page.into_iter().filter(|i| !known.contains(&i.list_id())));
        }

        if next_cursor.is_some() {
            self.cursor = next_cursor;
        } else if ticket.resync {
            self.cursor = None;
        }
        self.has_more = full_page;
        self.error = None;
        self.phase = ListPhase::Idle;
        true
    }

    /// Record a fetch failure. The buffer is left untouched; the feed is
    /// treated as exhausted until the user explicitly refreshes.
    pub fn apply_error(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.has_more = false;
        self.error = Some(message.into());
        self.phase = ListPhase::Error;
        true
    }

    /// Optimistic removal after a successful delete; no refetch
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.list_id() != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        created_at: i64,
    }

    impl ListRecord for Row {
        fn list_id(&self) -> String {
            self.id.clone()
        }
    }

    fn rows(range: std::ops::Range<i64>) -> Vec<Row> {
        // Descending created_at, like the server returns
        range
            .rev()
            .map(|n| Row {
                id: format!("r{n}"),
                created_at: n,
            })
            .collect()
    }

    fn cursor_of(page: &[Row]) -> Option<String> {
        page.last().map(|r| format!("cur:{}", r.id))
    }

    #[test]
    fn initial_fetch_fills_buffer_and_sets_has_more() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let ticket = session.begin_fetch(true).unwrap();
        assert!(session.is_loading());

        let page = rows(90..100);
        let cursor = cursor_of(&page);
        assert!(session.apply_page(&ticket, page, cursor));

        assert_eq!(session.len(), 10);
        assert!(session.has_more());
        assert_eq!(session.phase(), &ListPhase::Idle);
    }

    #[test]
    fn scenario_a_two_pages_then_exhaustion() {
        // pageSize=10: full first page, short second page
        let mut session: ListSession<Row> = ListSession::new(10);

        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(90..100);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);
        assert!(session.has_more());

        let ticket = session.begin_fetch(false).unwrap();
        assert_eq!(ticket.cursor.as_deref(), Some("cur:r90"));
        let page = rows(86..90); // only 4 left
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        assert_eq!(session.len(), 14);
        assert!(!session.has_more());
        // strictly descending created_at
        let stamps: Vec<i64> = session.items().iter().map(|r| r.created_at).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
        // no duplicate ids
        let unique: HashSet<String> = session.items().iter().map(|r| r.list_id()).collect();
        assert_eq!(unique.len(), session.len());
    }

    #[test]
    fn scenario_b_filter_change_resyncs_from_scratch() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(90..100);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        // Filter changed: resync starts over with no cursor
        let ticket = session.begin_fetch(true).unwrap();
        assert!(ticket.cursor.is_none());

        let page = rows(95..98);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        // Buffer replaced, not appended to
        assert_eq!(session.len(), 3);
        assert!(!session.has_more());
    }

    #[test]
    fn scenario_d_optimistic_delete_removes_without_refetch() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(97..100); // r99, r98, r97
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        assert!(session.remove("r99"));
        assert_eq!(
            session.items().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["r98", "r97"]
        );
        // no fetch started by the removal
        assert_eq!(session.phase(), &ListPhase::Idle);
        assert!(!session.remove("r99"));
    }

    #[test]
    fn scenario_e_second_fetch_is_dropped_while_loading() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(90..100);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        let first = session.begin_fetch(false);
        assert!(first.is_some());
        // Sentinel fires again while the fetch is in flight: refused
        assert!(session.begin_fetch(false).is_none());
    }

    #[test]
    fn resync_supersedes_in_flight_fetch() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(90..100);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        let stale = session.begin_fetch(false).unwrap();
        // Filter change mid-flight
        let fresh = session.begin_fetch(true).unwrap();

        let fresh_page = rows(40..43);
        let fresh_cursor = cursor_of(&fresh_page);
        assert!(session.apply_page(&fresh, fresh_page, fresh_cursor));

        // The stale response arrives afterwards and must not be merged
        let stale_page = rows(80..90);
        let stale_cursor = cursor_of(&stale_page);
        assert!(!session.apply_page(&stale, stale_page, stale_cursor));

        assert_eq!(session.len(), 3);
        assert_eq!(session.items()[0].id, "r42");
    }

    #[test]
    fn stale_error_is_ignored_too() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let stale = session.begin_fetch(true).unwrap();
        let fresh = session.begin_fetch(true).unwrap();

        assert!(!session.apply_error(&stale, "network down"));
        assert!(session.error().is_none());

        let page = rows(0..5);
        let cursor = cursor_of(&page);
        assert!(session.apply_page(&fresh, page, cursor));
        assert_eq!(session.len(), 5);
    }

    #[test]
    fn fetch_failure_keeps_buffer_and_stops_paging() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(90..100);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        let ticket = session.begin_fetch(false).unwrap();
        assert!(session.apply_error(&ticket, "missing index"));

        assert_eq!(session.len(), 10); // untouched
        assert!(!session.has_more());
        assert_eq!(session.phase(), &ListPhase::Error);
        assert_eq!(session.error(), Some("missing index"));
    }

    #[test]
    fn exact_multiple_costs_one_extra_empty_fetch() {
        // 20 records, page size 10: the second full page keeps has_more
        // true, and only the third (empty) fetch settles it. One spare
        // round trip, not a bug.
        let mut session: ListSession<Row> = ListSession::new(10);

        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(10..20);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);
        assert!(session.has_more());

        let ticket = session.begin_fetch(false).unwrap();
        let page = rows(0..10);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);
        assert!(session.has_more());

        let ticket = session.begin_fetch(false).unwrap();
        assert!(session.apply_page(&ticket, Vec::new(), None));
        assert!(!session.has_more());
        assert_eq!(session.len(), 20);
        // cursor survives the empty page; a later fetch would resume in place
        assert_eq!(session.cursor.as_deref(), Some("cur:r0"));
    }

    #[test]
    fn duplicate_ids_across_pages_are_dropped() {
        let mut session: ListSession<Row> = ListSession::new(3);
        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(7..10);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        // Server overlap: r7 appears again on the next page
        let ticket = session.begin_fetch(false).unwrap();
        let page = vec![
            Row { id: "r7".into(), created_at: 7 },
            Row { id: "r6".into(), created_at: 6 },
            Row { id: "r5".into(), created_at: 5 },
        ];
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);

        let ids: Vec<String> = session.items().iter().map(|r| r.list_id()).collect();
        assert_eq!(ids, vec!["r9", "r8", "r7", "r6", "r5"]);
    }

    #[test]
    fn non_resync_refused_after_exhaustion() {
        let mut session: ListSession<Row> = ListSession::new(10);
        let ticket = session.begin_fetch(true).unwrap();
        let page = rows(95..100);
        let cursor = cursor_of(&page);
        session.apply_page(&ticket, page, cursor);
        assert!(!session.has_more());

        assert!(session.begin_fetch(false).is_none());
        // refresh still allowed
        assert!(session.begin_fetch(true).is_some());
    }
}
