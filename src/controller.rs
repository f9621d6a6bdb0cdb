//! Filterable list controller.
//!
//! Wraps a [`FilterState`] with the fetch lifecycle of one list view. Every
//! apply, reset, page change or URL change issues a [`FetchTicket`]; only the
//! completion carrying the most recently issued ticket is allowed to replace
//! the displayed data. Older completions are dropped no matter when they
//! arrive, so a slow first response cannot overwrite a fast later one.

use async_trait::async_trait;
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::filters::{FilterError, FilterSpec, FilterState};

/// Anything able to produce a page of data for an encoded filter query.
#[async_trait]
pub trait ListSource: Send + Sync {
    type Page: Send;

    async fn fetch(&self, query: &str) -> Result<Self::Page, ApiError>;
}

/// Fetch lifecycle of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    Idle,
    Fetching,
    Success,
    Error,
}

/// Identity of one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    query: String,
}

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Whether a completion was rendered or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Accepted,
    Stale,
}

#[derive(Debug)]
pub struct ListController<T> {
    state: FilterState,
    status: FetchStatus,
    data: Option<T>,
    error: Option<String>,
    issued: u64,
    pending: Option<u64>,
}

impl<T> ListController<T> {
    pub fn new(spec: FilterSpec) -> Self {
        Self {
            state: FilterState::new(spec),
            status: FetchStatus::Idle,
            data: None,
            error: None,
            issued: 0,
            pending: None,
        }
    }

    /// Mounts the controller on a URL query. Nothing is fetched yet.
    pub fn from_url(spec: FilterSpec, url_query: &str) -> Self {
        let mut controller = Self::new(spec);
        controller.state.sync_from_url(url_query);
        controller
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Query string the address bar should show.
    pub fn location(&self) -> String {
        self.state.location_query()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.state.fields()
    }

    /// Edits one field; nothing is fetched until the filters are applied.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FilterError> {
        self.state.set_field(name, value)
    }

    /// Commits the form, resets pagination and issues a fetch for the
    /// canonical query.
    pub fn apply_filters(&mut self) -> FetchTicket {
        let query = self.state.apply();
        log::debug!("Applying filters: {query:?}");
        self.issue(query)
    }

    pub fn reset_filters(&mut self) -> FetchTicket {
        self.state.reset();
        self.issue(String::new())
    }

    pub fn go_to_page(&mut self, page: u32) -> Result<FetchTicket, FilterError> {
        self.state.go_to_page(page)?;
        Ok(self.issue(self.state.applied_query()))
    }

    /// Re-derives fields and applied query after navigation.
    pub fn sync_from_url(&mut self, url_query: &str) -> FetchTicket {
        self.state.sync_from_url(url_query);
        self.issue(self.state.applied_query())
    }

    /// Ticket for refetching the current applied query.
    pub fn refetch(&mut self) -> FetchTicket {
        self.issue(self.state.applied_query())
    }

    fn issue(&mut self, query: String) -> FetchTicket {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.status = FetchStatus::Fetching;
        FetchTicket {
            id: self.issued,
            query,
        }
    }

    /// Records the outcome of a fetch.
    ///
    /// Completions for anything but the latest ticket are discarded. A
    /// failure keeps the previously displayed data.
    pub fn complete(&mut self, ticket: &FetchTicket, result: Result<T, ApiError>) -> Completion {
        if self.pending != Some(ticket.id) {
            log::debug!(
                "Discarding stale response #{} for {:?}",
                ticket.id,
                ticket.query
            );
            return Completion::Stale;
        }
        self.pending = None;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.status = FetchStatus::Success;
            }
            Err(err) => {
                log::error!("Failed to fetch {:?}: {err}", ticket.query);
                self.error = Some(err.user_message("Failed to load data"));
                self.status = FetchStatus::Error;
            }
        }
        Completion::Accepted
    }

    /// Returns to idle once the outcome has been shown.
    pub fn settle(&mut self) {
        if self.pending.is_none() {
            self.status = FetchStatus::Idle;
        }
    }

    /// Drops the displayed data and any error.
    pub fn clear(&mut self) {
        self.data = None;
        self.error = None;
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.pending == Some(ticket.id)
    }

    /// Issues a fetch for the applied query and waits for it.
    pub async fn load<S>(&mut self, source: &S) -> Completion
    where
        S: ListSource<Page = T> + ?Sized,
    {
        let ticket = self.refetch();
        let result = source.fetch(ticket.query()).await;
        self.complete(&ticket, result)
    }
}

/// Runs the fetch for `ticket` without borrowing the controller, so several
/// fetches can be in flight at once.
pub async fn run_fetch<S>(
    source: &S,
    ticket: FetchTicket,
) -> (FetchTicket, Result<S::Page, ApiError>)
where
    S: ListSource + ?Sized,
{
    let result = source.fetch(ticket.query()).await;
    (ticket, result)
}
