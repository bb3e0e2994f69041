use crate::models::VideoInfo;
use crate::utils::{
    format_iso8601_date, format_number, format_optional_duration, format_with_separators,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(|| props.query.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="search-input-group">
            <input
                type="text"
                class="search-input"
                placeholder="Enter a keyword to search for..."
                value={(*current_input).clone()}
                oninput={on_input}
                required={true}
            />
            <button type="submit" class="search-button" disabled={props.loading}>
                { if props.loading { "Searching..." } else { "Search" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="error-message">{ msg }</div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsSummaryProps {
    pub total_results: u64,
    pub range: Option<(u64, u64)>,
}

#[function_component(ResultsSummary)]
pub fn results_summary(props: &ResultsSummaryProps) -> Html {
    if props.total_results == 0 {
        return html! {};
    }

    html! {
        <div class="results-info">
            { "Found " }<strong>{ format_with_separators(props.total_results) }</strong>{ " results" }
            {
                if let Some((start, end)) = props.range {
                    html! {
                        <span class="results-range">
                            { format!(" (showing {} - {})", format_with_separators(start), format_with_separators(end)) }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoInfo,
}

fn stat(label: &'static str, value: Option<u64>) -> Html {
    match value {
        Some(n) if n > 0 => html! {
            <span class="video-stat" title={label}>{ format!("{label} {}", format_number(Some(n))) }</span>
        },
        _ => html! {},
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let duration = format_optional_duration(video.duration.as_deref());

    html! {
        <div class="video-card">
            <a href={format!("https://www.youtube.com/watch?v={}", video.video_id)}
               target="_blank"
               rel="noopener noreferrer"
               class="video-link">
                <div class="video-thumbnail">
                    <img src={video.thumbnail_url.clone()} alt={video.title.clone()} />
                    {
                        if let Some(duration) = duration {
                            html! { <span class="video-duration">{ duration }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="video-info">
                    <h3 class="video-title">{ &video.title }</h3>
                    <p class="video-channel">{ &video.channel_title }</p>
                    <div class="video-meta">
                        { stat("👁️", video.view_count) }
                        { stat("👍", video.like_count) }
                        { stat("👥", video.subscriber_count) }
                    </div>
                    <p class="video-date">{ format_iso8601_date(&video.published_at) }</p>
                </div>
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<VideoInfo>,
    pub loading: bool,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    let class = if props.loading {
        "videos-grid loading"
    } else {
        "videos-grid"
    };

    html! {
        <div {class}>
            { for props.videos.iter().map(|video| html! {
                <VideoCard key={video.video_id.clone()} video={video.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub page_number: usize,
    pub total_pages: u64,
    pub total_results: u64,
    pub range: Option<(u64, u64)>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub on_previous: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    html! {
        <div class="pagination">
            <button
                onclick={props.on_previous.clone()}
                disabled={!props.can_go_previous}
                class="pagination-button prev"
            >
                {"Previous"}
            </button>

            <div class="pagination-info">
                <span class="page-number">{ props.page_number.to_string() }</span>
                {
                    match props.range {
                        Some((start, end)) if props.total_results > 0 => html! {
                            <span class="page-range">
                                { format!(
                                    "{} - {} / {}",
                                    format_with_separators(start),
                                    format_with_separators(end),
                                    format_with_separators(props.total_results)
                                ) }
                            </span>
                        },
                        _ => html! {},
                    }
                }
                {
                    if props.total_pages > 0 {
                        html! { <span class="total-pages">{ format!("{} pages", props.total_pages) }</span> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <button
                onclick={props.on_next.clone()}
                disabled={!props.can_go_next}
                class="pagination-button next"
            >
                {"Next"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <p>{ props.message.clone() }</p>
        </div>
    }
}
