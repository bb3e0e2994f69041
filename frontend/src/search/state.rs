use crate::error::SearchError;
use crate::models::{Order, SearchRequest, SearchResponse, VideoInfo};
use crate::search::search_options::{DurationFilter, SearchFilters};
use std::rc::Rc;
use yew::Reducible;

/// One page of results as returned by the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub videos: Vec<VideoInfo>,
    pub total_results: u64,
    pub next_page_token: Option<String>,
    /// Reported by the upstream but not used for navigation; history replay is.
    pub prev_page_token: Option<String>,
    /// `maxResults` of the request that produced this page.
    pub page_size: u32,
}

impl ResultPage {
    pub fn new(response: SearchResponse, page_size: u32) -> Self {
        Self {
            videos: response.videos,
            total_results: response.total_results,
            next_page_token: response.next_page_token,
            prev_page_token: response.prev_page_token,
            page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Fresh,
    Forward(String),
    Backward,
}

/// A request that has been handed to the API client and not yet answered.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub id: u64,
    pub request: SearchRequest,
    pub navigation: Navigation,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading {
        pending: PendingSearch,
        stale: Option<ResultPage>,
    },
    Ready(ResultPage),
    Error(String),
}

/// Cursors of every page after the first, up to and including the current one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pagination {
    history: Vec<String>,
}

impl Pagination {
    pub fn page_number(&self) -> usize {
        self.history.len() + 1
    }

    #[cfg(test)]
    pub fn current_cursor(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Cursor of the page before the current one, `None` meaning the first page.
    pub fn previous_cursor(&self) -> Option<&str> {
        self.history
            .len()
            .checked_sub(2)
            .map(|i| self.history[i].as_str())
    }

    #[cfg(test)]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn reset(&mut self) {
        self.history.clear();
    }
}

#[derive(Debug)]
pub enum SearchAction {
    Submit(String),
    OrderChanged(Order),
    MaxResultsChanged(u32),
    DurationChanged(DurationFilter),
    MinViewCountChanged(String),
    MaxViewCountChanged(String),
    PublishedAfterChanged(String),
    PublishedBeforeChanged(String),
    NextPage,
    PreviousPage,
    Completed {
        request_id: u64,
        outcome: Result<SearchResponse, SearchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub keyword: String,
    pub filters: SearchFilters,
    pub phase: SearchPhase,
    pub pagination: Pagination,
    last_request_id: u64,
}

pub fn validate_keyword(keyword: &str) -> Result<String, SearchError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        Err(SearchError::Validation(
            "Please enter a search keyword".to_string(),
        ))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn total_pages(total_results: u64, max_results: u32) -> u64 {
    if total_results == 0 || max_results == 0 {
        return 0;
    }
    total_results.div_ceil(u64::from(max_results))
}

/// 1-based inclusive range of results shown on `page_number`.
pub fn display_range(page_number: usize, max_results: u32, total_results: u64) -> (u64, u64) {
    let page = page_number.max(1) as u64;
    let per_page = u64::from(max_results);
    let start = (page - 1) * per_page + 1;
    let end = (page * per_page).min(total_results);
    (start, end)
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }

    pub fn pending(&self) -> Option<&PendingSearch> {
        match &self.phase {
            SearchPhase::Loading { pending, .. } => Some(pending),
            _ => None,
        }
    }

    /// The page to render: the settled one, or the previous one while loading.
    pub fn visible_page(&self) -> Option<&ResultPage> {
        match &self.phase {
            SearchPhase::Ready(page) => Some(page),
            SearchPhase::Loading { stale, .. } => stale.as_ref(),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn next_page_token(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Ready(page) => page.next_page_token.as_deref(),
            _ => None,
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.next_page_token().is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_loading() && self.pagination.page_number() > 1
    }

    /// Measured against the visible page's own size, so a stale page keeps its numbers
    /// while a search with a different `maxResults` is loading.
    pub fn total_pages(&self) -> u64 {
        self.visible_page()
            .map(|page| total_pages(page.total_results, page.page_size))
            .unwrap_or(0)
    }

    pub fn display_range(&self) -> Option<(u64, u64)> {
        self.visible_page().map(|page| {
            display_range(
                self.pagination.page_number(),
                page.page_size,
                page.total_results,
            )
        })
    }

    pub fn build_request(&self, page_token: Option<String>) -> SearchRequest {
        SearchRequest {
            keyword: self.keyword.clone(),
            max_results: self.filters.max_results,
            order: self.filters.order,
            published_after: self.filters.published_after(),
            published_before: self.filters.published_before(),
            video_duration: self.filters.duration.to_request(),
            min_view_count: self.filters.min_view_count(),
            max_view_count: self.filters.max_view_count(),
            page_token,
        }
    }

    /// Applies `action`, returning whether anything changed.
    pub fn apply(&mut self, action: SearchAction) -> bool {
        match action {
            SearchAction::Submit(keyword) => match validate_keyword(&keyword) {
                Ok(keyword) => {
                    self.keyword = keyword;
                    self.start_fresh_search();
                    true
                }
                Err(e) => {
                    log::debug!("Search not submitted: {e}");
                    false
                }
            },
            SearchAction::OrderChanged(order) => {
                self.filters.order = order;
                self.criteria_changed();
                true
            }
            SearchAction::MaxResultsChanged(max_results) => {
                self.filters.max_results = max_results;
                self.criteria_changed();
                true
            }
            SearchAction::DurationChanged(duration) => {
                self.filters.duration = duration;
                self.criteria_changed();
                true
            }
            SearchAction::MinViewCountChanged(value) => {
                self.filters.min_view_count = value;
                true
            }
            SearchAction::MaxViewCountChanged(value) => {
                self.filters.max_view_count = value;
                true
            }
            SearchAction::PublishedAfterChanged(value) => {
                self.filters.published_after = value;
                true
            }
            SearchAction::PublishedBeforeChanged(value) => {
                self.filters.published_before = value;
                true
            }
            SearchAction::NextPage => match self.next_page_token().map(str::to_string) {
                Some(token) => {
                    self.begin(Navigation::Forward(token));
                    true
                }
                None => false,
            },
            SearchAction::PreviousPage => {
                if !self.can_go_previous() {
                    return false;
                }
                self.begin(Navigation::Backward);
                true
            }
            SearchAction::Completed {
                request_id,
                outcome,
            } => self.complete(request_id, outcome),
        }
    }

    fn criteria_changed(&mut self) {
        if self.keyword.is_empty() {
            self.pagination.reset();
        } else {
            self.start_fresh_search();
        }
    }

    fn start_fresh_search(&mut self) {
        self.pagination.reset();
        self.begin(Navigation::Fresh);
    }

    fn begin(&mut self, navigation: Navigation) {
        let page_token = match &navigation {
            Navigation::Fresh => None,
            Navigation::Forward(token) => Some(token.clone()),
            Navigation::Backward => self.pagination.previous_cursor().map(str::to_string),
        };

        self.last_request_id += 1;
        let pending = PendingSearch {
            id: self.last_request_id,
            request: self.build_request(page_token),
            navigation,
        };
        log::debug!(
            "Dispatching search #{} ({:?}) on page {}",
            pending.id,
            pending.navigation,
            self.pagination.page_number()
        );

        let stale = match std::mem::take(&mut self.phase) {
            SearchPhase::Ready(page) => Some(page),
            SearchPhase::Loading { stale, .. } => stale,
            SearchPhase::Idle | SearchPhase::Error(_) => None,
        };
        self.phase = SearchPhase::Loading { pending, stale };
    }

    fn complete(
        &mut self,
        request_id: u64,
        outcome: Result<SearchResponse, SearchError>,
    ) -> bool {
        let (navigation, page_size) = match self.pending() {
            Some(pending) if pending.id == request_id => {
                (pending.navigation.clone(), pending.request.max_results)
            }
            _ => {
                log::warn!("Discarding response to superseded search #{request_id}");
                return false;
            }
        };

        match outcome {
            Ok(response) => {
                match navigation {
                    Navigation::Fresh => self.pagination.reset(),
                    Navigation::Forward(token) => self.pagination.history.push(token),
                    Navigation::Backward => {
                        self.pagination.history.pop();
                    }
                }
                self.phase = SearchPhase::Ready(ResultPage::new(response, page_size));
            }
            Err(e) => {
                log::error!("Search #{request_id} failed: {e}");
                self.pagination.reset();
                self.phase = SearchPhase::Error(e.to_string());
            }
        }
        true
    }
}

impl Reducible for SearchState {
    type Action = SearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
