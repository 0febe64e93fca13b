//! Debounced remote search over a paged resource.
//!
//! [`SearchSession`] is the pure state: query echo, visible page, last-good result and the
//! sequence numbers used to drop stale responses. [`use_debounced_search`] drives it from
//! Leptos with a `gloo_timers` timeout; replacing or dropping the timeout handle cancels it.

use std::future::Future;

use contracts::shared::api::PageResult;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::config::use_config;
use crate::shared::pagination::accept_page_request;
use crate::system::auth::context::use_error_reporter;

/// Request handed to the paged-fetch collaborator.
///
/// `query == None` selects the plain list endpoint, `Some` the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

/// Identifies one armed debounce timer; any later edit makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
    /// The request failed; the last-good page stays visible.
    Failed,
}

#[derive(Debug, Clone)]
pub struct SearchSession<T> {
    query: String,
    page: usize,
    /// Page of the last applied result; a failed fetch falls back to it.
    committed_page: usize,
    /// Page carried by the latest issued request.
    issued_page: usize,
    page_size: usize,
    pending: Option<DebounceTicket>,
    next_ticket: u64,
    issued_seq: u64,
    applied_seq: u64,
    result: PageResult<T>,
    error: Option<String>,
    loading: bool,
}

impl<T> SearchSession<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            committed_page: 1,
            issued_page: 1,
            page_size,
            pending: None,
            next_ticket: 0,
            issued_seq: 0,
            applied_seq: 0,
            result: PageResult::default(),
            error: None,
            loading: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.result.total_pages
    }

    pub fn items(&self) -> &[T] {
        &self.result.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_pending_input(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a keystroke: echoes the query, resets the page to 1 and supersedes any
    /// armed timer. The caller arms a new timer for the returned ticket.
    pub fn input(&mut self, query: impl Into<String>) -> DebounceTicket {
        self.query = query.into();
        self.page = 1;
        self.next_ticket += 1;
        let ticket = DebounceTicket(self.next_ticket);
        self.pending = Some(ticket);
        ticket
    }

    /// Timer expiry. Only the most recent ticket produces a request.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<FetchRequest> {
        if self.pending != Some(ticket) {
            return None;
        }
        self.pending = None;
        self.page = 1;
        Some(self.issue())
    }

    /// Explicit page change; bypasses the debounce. Pages outside `1..=total_pages` of the
    /// result on screen are ignored.
    ///
    /// The request carries the latest typed query, so a pending keystroke is folded into it.
    pub fn change_page(&mut self, page: usize) -> Option<FetchRequest> {
        let page = accept_page_request(page, self.result.total_pages)?;
        self.pending = None;
        self.page = page;
        Some(self.issue())
    }

    /// Re-issues the current query and page, e.g. on mount or after a mutation.
    pub fn refresh(&mut self) -> FetchRequest {
        self.pending = None;
        self.issue()
    }

    /// Clears the query and goes back to page 1 with an immediate request.
    pub fn reset(&mut self) -> FetchRequest {
        self.query.clear();
        self.page = 1;
        self.refresh()
    }

    /// Reload after a row was deleted: an active search is cleared, otherwise the page
    /// steps back when it would become empty.
    pub fn refresh_after_delete(&mut self) -> FetchRequest {
        if !self.query.trim().is_empty() {
            return self.reset();
        }
        if self.result.items.len() == 1 && self.page > 1 {
            self.page -= 1;
        }
        self.refresh()
    }

    /// Applies a response. Anything older than the latest issued request is dropped.
    pub fn apply(&mut self, seq: u64, response: Result<PageResult<T>, String>) -> ApplyOutcome {
        if seq < self.issued_seq || seq <= self.applied_seq {
            return ApplyOutcome::Stale;
        }
        self.applied_seq = seq;
        self.loading = false;
        match response {
            Ok(result) => {
                self.committed_page = self.issued_page;
                self.result = result;
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(message) => {
                if self.pending.is_none() {
                    self.page = self.committed_page;
                }
                self.error = Some(message);
                ApplyOutcome::Failed
            }
        }
    }

    fn issue(&mut self) -> FetchRequest {
        self.issued_seq += 1;
        self.issued_page = self.page;
        self.loading = true;
        let query = self.query.trim();
        FetchRequest {
            seq: self.issued_seq,
            query: (!query.is_empty()).then(|| query.to_string()),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Leptos handle over a [`SearchSession`]; `Copy`, so it can move into any event handler.
pub struct SearchController<T: Send + Sync + 'static> {
    pub session: RwSignal<SearchSession<T>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    dispatch: Callback<FetchRequest>,
    debounce_ms: u32,
}

impl<T: Send + Sync + 'static> Clone for SearchController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SearchController<T> {}

impl<T: Send + Sync + 'static> SearchController<T> {
    /// Keystroke: echo immediately, fetch page 1 after the debounce window.
    pub fn input(&self, query: String) {
        let Some(ticket) = self.session.try_update(|s| s.input(query)) else {
            return;
        };
        let session = self.session;
        let dispatch = self.dispatch;
        let timeout = Timeout::new(self.debounce_ms, move || {
            if let Some(Some(request)) = session.try_update(|s| s.fire(ticket)) {
                dispatch.run(request);
            }
        });
        // Dropping the previous handle cancels its timer.
        self.timer.set_value(Some(timeout));
    }

    pub fn change_page(&self, page: usize) {
        if let Some(Some(request)) = self.session.try_update(|s| s.change_page(page)) {
            self.timer.set_value(None);
            self.dispatch.run(request);
        }
    }

    pub fn refresh(&self) {
        self.timer.set_value(None);
        if let Some(request) = self.session.try_update(|s| s.refresh()) {
            self.dispatch.run(request);
        }
    }

    pub fn reset(&self) {
        self.timer.set_value(None);
        if let Some(request) = self.session.try_update(|s| s.reset()) {
            self.dispatch.run(request);
        }
    }

    pub fn refresh_after_delete(&self) {
        self.timer.set_value(None);
        if let Some(request) = self.session.try_update(|s| s.refresh_after_delete()) {
            self.dispatch.run(request);
        }
    }
}

/// Creates a search session bound to `fetcher` and loads the first page.
///
/// `context` names the screen in error notifications.
pub fn use_debounced_search<T, F, Fut>(context: &'static str, fetcher: F) -> SearchController<T>
where
    T: Send + Sync + 'static,
    F: Fn(FetchRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<PageResult<T>, ApiError>> + 'static,
{
    let config = use_config();
    let reporter = use_error_reporter();
    let session = RwSignal::new(SearchSession::new(config.page_size));
    let timer = StoredValue::new_local(None::<Timeout>);

    let dispatch = Callback::new(move |request: FetchRequest| {
        let seq = request.seq;
        log::debug!(
            "{}: fetch #{} page {} query {:?}",
            context,
            seq,
            request.page,
            request.query
        );
        let pending = fetcher(request);
        spawn_local(async move {
            let response = pending.await;
            let message = response.as_ref().err().map(ToString::to_string);
            let error = response.as_ref().err().cloned();
            let outcome = session.try_update(|s| s.apply(seq, response.map_err(|e| e.to_string())));
            match (outcome, error) {
                (Some(ApplyOutcome::Stale), _) => {
                    log::debug!("{}: dropped stale response #{}", context, seq);
                }
                (Some(ApplyOutcome::Failed), Some(err)) => {
                    log::warn!("{}: fetch #{} failed: {}", context, seq, message.unwrap_or_default());
                    reporter.report(context, err);
                }
                _ => {}
            }
        });
    });

    let controller = SearchController {
        session,
        timer,
        dispatch,
        debounce_ms: config.debounce_ms,
    };
    controller.refresh();
    controller
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[u32], total_pages: usize) -> Result<PageResult<u32>, String> {
        Ok(PageResult {
            items: items.to_vec(),
            total_pages,
        })
    }

    #[test]
    fn test_burst_of_keystrokes_fetches_once_with_last_value() {
        let mut session = SearchSession::<u32>::new(10);
        let tickets: Vec<_> = ["k", "ke", "ker", "kert", "kertas"]
            .into_iter()
            .map(|q| session.input(q))
            .collect();

        // Superseded timers produce nothing even if they were not cancelled in time.
        for ticket in &tickets[..4] {
            assert_eq!(session.fire(*ticket), None);
        }
        let request = session.fire(tickets[4]).expect("last keystroke fetches");
        assert_eq!(request.query.as_deref(), Some("kertas"));
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 10);

        // A ticket fires at most once.
        assert_eq!(session.fire(tickets[4]), None);
    }

    #[test]
    fn test_empty_query_uses_list_endpoint() {
        let mut session = SearchSession::<u32>::new(10);
        let ticket = session.input("   ");
        assert_eq!(session.fire(ticket).unwrap().query, None);
    }

    #[test]
    fn test_query_edit_resets_page_before_fetch_resolves() {
        let mut session = SearchSession::<u32>::new(10);
        let first = session.refresh();
        session.apply(first.seq, page(&[1, 2], 5));
        session.change_page(4).unwrap();
        assert_eq!(session.page(), 4);

        session.input("map");
        assert_eq!(session.page(), 1);
        assert_eq!(session.query(), "map");
        assert!(session.has_pending_input());
    }

    #[test]
    fn test_page_change_is_immediate_and_bounded() {
        let mut session = SearchSession::<u32>::new(10);
        let first = session.refresh();
        session.apply(first.seq, page(&[1], 3));

        let request = session.change_page(2).expect("in range");
        assert_eq!(request.page, 2);
        assert_eq!(request.query, None);

        assert_eq!(session.change_page(0), None);
        assert_eq!(session.change_page(4), None);
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn test_page_change_supersedes_pending_keystroke() {
        let mut session = SearchSession::<u32>::new(10);
        let first = session.refresh();
        session.apply(first.seq, page(&[1], 3));

        let ticket = session.input("pena");
        let request = session.change_page(3).unwrap();
        assert_eq!(request.query.as_deref(), Some("pena"));
        assert_eq!(session.fire(ticket), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut session = SearchSession::<u32>::new(10);
        let older = session.input("a");
        let older = session.fire(older).unwrap();
        let newer = session.input("ab");
        let newer = session.fire(newer).unwrap();

        assert_eq!(session.apply(newer.seq, page(&[2], 1)), ApplyOutcome::Applied);
        assert_eq!(session.apply(older.seq, page(&[1], 9)), ApplyOutcome::Stale);
        assert_eq!(session.items(), &[2]);
        assert_eq!(session.total_pages(), 1);
    }

    #[test]
    fn test_older_response_arriving_first_is_dropped_too() {
        let mut session = SearchSession::<u32>::new(10);
        let older = session.refresh();
        let newer = session.refresh();
        assert_eq!(session.apply(older.seq, page(&[1], 1)), ApplyOutcome::Stale);
        assert!(session.is_loading());
        assert_eq!(session.apply(newer.seq, page(&[2], 1)), ApplyOutcome::Applied);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_failure_keeps_last_good_page() {
        let mut session = SearchSession::<u32>::new(10);
        let first = session.refresh();
        session.apply(first.seq, page(&[7, 8], 2));

        let second = session.refresh();
        assert_eq!(
            session.apply(second.seq, Err("Gagal".into())),
            ApplyOutcome::Failed
        );
        assert_eq!(session.items(), &[7, 8]);
        assert_eq!(session.error(), Some("Gagal"));

        let third = session.refresh();
        session.apply(third.seq, page(&[9], 2));
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_failed_page_change_returns_to_shown_page() {
        let mut session = SearchSession::<u32>::new(10);
        let first = session.refresh();
        session.apply(first.seq, page(&[1], 3));

        let request = session.change_page(3).unwrap();
        assert_eq!(session.page(), 3);
        assert_eq!(
            session.apply(request.seq, Err("Gagal".into())),
            ApplyOutcome::Failed
        );
        assert_eq!(session.items(), &[1]);
        assert_eq!(session.page(), 1);

        let request = session.change_page(2).unwrap();
        session.apply(request.seq, page(&[20], 3));
        let request = session.change_page(3).unwrap();
        session.apply(request.seq, Err("Gagal".into()));
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn test_failure_after_new_keystroke_keeps_page_one() {
        let mut session = SearchSession::<u32>::new(10);
        let first = session.refresh();
        session.apply(first.seq, page(&[1], 3));
        let request = session.change_page(3).unwrap();

        session.input("kertas");
        session.apply(request.seq, Err("Gagal".into()));
        assert_eq!(session.page(), 1);
        assert!(session.has_pending_input());
    }

    #[test]
    fn test_delete_of_last_row_steps_back_a_page() {
        let mut session = SearchSession::<u32>::new(10);
        let first = session.refresh();
        session.apply(first.seq, page(&[1], 3));
        let request = session.change_page(3).unwrap();
        session.apply(request.seq, page(&[30], 3));

        assert_eq!(session.refresh_after_delete().page, 2);

        let request = session.refresh();
        session.apply(request.seq, page(&[20, 21], 2));
        assert_eq!(session.refresh_after_delete().page, 2);
    }

    #[test]
    fn test_delete_during_search_clears_it() {
        let mut session = SearchSession::<u32>::new(10);
        let ticket = session.input("meja");
        let request = session.fire(ticket).unwrap();
        session.apply(request.seq, page(&[4], 1));

        let request = session.refresh_after_delete();
        assert_eq!(request.query, None);
        assert_eq!(request.page, 1);
        assert_eq!(session.query(), "");
    }

    #[test]
    fn test_reset_clears_query() {
        let mut session = SearchSession::<u32>::new(10);
        session.input("kursi");
        let request = session.reset();
        assert_eq!(request.query, None);
        assert_eq!(request.page, 1);
        assert!(!session.has_pending_input());
    }
}
