use crate::config::APP_NAME;
use crate::models::Order;
use crate::search::api::{ApiClient, RequestOptions};
use crate::search::components::{
    EmptyState, ErrorMessage, PaginationControls, ResultsSummary, SearchBar, VideoGrid,
};
use crate::search::search_options::{DurationFilter, SearchOptionsDropdowns};
use crate::search::state::{PendingSearch, SearchAction, SearchPhase, SearchState};
use web_sys::AbortController;
use yew::prelude::*;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Runs `pending` against the backend and reports back through `dispatcher`.
/// The returned controller aborts the fetch once the request is superseded.
fn spawn_search(
    pending: PendingSearch,
    dispatcher: UseReducerDispatcher<SearchState>,
) -> Option<AbortController> {
    let controller = AbortController::new().ok();
    let options = RequestOptions {
        abort_signal: controller.as_ref().map(AbortController::signal),
        ..RequestOptions::default()
    };

    wasm_bindgen_futures::spawn_local(async move {
        let client = ApiClient::from_config();
        let outcome = client.search_videos_with(&pending.request, &options).await;
        dispatcher.dispatch(SearchAction::Completed {
            request_id: pending.id,
            outcome,
        });
    });

    controller
}

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let state = use_reducer(SearchState::default);

    // Fetch whenever a new request becomes pending.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.pending().cloned(), move |pending| {
            let controller = pending
                .clone()
                .and_then(|pending| spawn_search(pending, dispatcher));
            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    let on_search = {
        let state = state.clone();
        Callback::from(move |query: String| state.dispatch(SearchAction::Submit(query)))
    };

    let on_order_change = {
        let state = state.clone();
        Callback::from(move |order: Order| state.dispatch(SearchAction::OrderChanged(order)))
    };

    let on_max_results_change = {
        let state = state.clone();
        Callback::from(move |max: u32| state.dispatch(SearchAction::MaxResultsChanged(max)))
    };

    let on_duration_change = {
        let state = state.clone();
        Callback::from(move |duration: DurationFilter| {
            state.dispatch(SearchAction::DurationChanged(duration))
        })
    };

    let on_min_view_count_input = {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.dispatch(SearchAction::MinViewCountChanged(value))
        })
    };

    let on_max_view_count_input = {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.dispatch(SearchAction::MaxViewCountChanged(value))
        })
    };

    let on_published_after_input = {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.dispatch(SearchAction::PublishedAfterChanged(value))
        })
    };

    let on_published_before_input = {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.dispatch(SearchAction::PublishedBeforeChanged(value))
        })
    };

    let on_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(SearchAction::NextPage);
            scroll_to_top();
        })
    };

    let on_previous = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(SearchAction::PreviousPage);
            scroll_to_top();
        })
    };

    let loading = state.is_loading();
    let page_number = state.pagination.page_number();
    let visible_page = state.visible_page();
    let total_results = visible_page.map(|page| page.total_results).unwrap_or(0);
    let videos = visible_page
        .map(|page| page.videos.clone())
        .unwrap_or_default();
    let range = state.display_range().filter(|_| !videos.is_empty());
    let show_pagination = visible_page.is_some_and(|page| page.next_page_token.is_some())
        || page_number > 1;

    let empty_message = match &state.phase {
        SearchPhase::Idle => Some("Enter a keyword to start searching"),
        SearchPhase::Ready(page) if page.videos.is_empty() => Some("No results found."),
        _ => None,
    };

    html! {
        <div class="search-page">
            <div class="search-header">
                <h1>{ APP_NAME.as_str() }</h1>
                <p class="subtitle">{"Find the videos you are looking for, fast"}</p>
            </div>

            <div class="search-form">
                <SearchBar
                    query={state.keyword.clone()}
                    loading={loading}
                    on_search={on_search}
                />
                <SearchOptionsDropdowns
                    filters={state.filters.clone()}
                    disabled={loading}
                    on_order_change={on_order_change}
                    on_max_results_change={on_max_results_change}
                    on_duration_change={on_duration_change}
                    on_min_view_count_input={on_min_view_count_input}
                    on_max_view_count_input={on_max_view_count_input}
                    on_published_after_input={on_published_after_input}
                    on_published_before_input={on_published_before_input}
                />
            </div>

            <ErrorMessage error_message={state.error_message().map(str::to_string)} />

            <ResultsSummary total_results={total_results} range={range} />

            <VideoGrid videos={videos} loading={loading} />

            {
                if let Some(message) = empty_message {
                    html! { <EmptyState message={message} /> }
                } else {
                    html! {}
                }
            }

            {
                if show_pagination {
                    html! {
                        <PaginationControls
                            page_number={page_number}
                            total_pages={state.total_pages()}
                            total_results={total_results}
                            range={range}
                            can_go_previous={state.can_go_previous()}
                            can_go_next={state.can_go_next()}
                            on_previous={on_previous}
                            on_next={on_next}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
