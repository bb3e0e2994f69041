use crate::models::{Order, VideoDuration};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

pub const MAX_RESULTS_CHOICES: [u32; 3] = [10, 25, 50];
pub const DEFAULT_MAX_RESULTS: u32 = 25;

/// Duration choices offered in the UI. `Shorts` has no upstream bucket of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationFilter {
    #[default]
    Any,
    Shorts,
    Short,
    Medium,
    Long,
}

impl DurationFilter {
    pub fn display_name(&self) -> &'static str {
        match self {
            DurationFilter::Any => "Any length",
            DurationFilter::Shorts => "Under 1 minute (Shorts)",
            DurationFilter::Short => "Under 4 minutes",
            DurationFilter::Medium => "4-20 minutes",
            DurationFilter::Long => "Over 20 minutes",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            DurationFilter::Any,
            DurationFilter::Shorts,
            DurationFilter::Short,
            DurationFilter::Medium,
            DurationFilter::Long,
        ]
    }

    pub fn to_request(self) -> VideoDuration {
        match self {
            DurationFilter::Any => VideoDuration::Any,
            DurationFilter::Shorts | DurationFilter::Short => VideoDuration::Short,
            DurationFilter::Medium => VideoDuration::Medium,
            DurationFilter::Long => VideoDuration::Long,
        }
    }
}

pub fn order_display_name(order: &Order) -> &'static str {
    match order {
        Order::Relevance => "Relevance",
        Order::Date => "Newest",
        Order::ViewCount => "View count",
        Order::Rating => "Rating",
        Order::Title => "Title",
        Order::VideoCount => "Video count",
    }
}

pub fn order_choices() -> Vec<Order> {
    vec![
        Order::Relevance,
        Order::Date,
        Order::ViewCount,
        Order::Rating,
        Order::Title,
    ]
}

fn order_from_key(key: &str) -> Option<Order> {
    match key {
        "date" => Some(Order::Date),
        "rating" => Some(Order::Rating),
        "relevance" => Some(Order::Relevance),
        "title" => Some(Order::Title),
        "videoCount" => Some(Order::VideoCount),
        "viewCount" => Some(Order::ViewCount),
        _ => None,
    }
}

fn duration_key(filter: &DurationFilter) -> &'static str {
    match filter {
        DurationFilter::Any => "any",
        DurationFilter::Shorts => "shorts",
        DurationFilter::Short => "short",
        DurationFilter::Medium => "medium",
        DurationFilter::Long => "long",
    }
}

fn duration_from_key(key: &str) -> Option<DurationFilter> {
    match key {
        "any" => Some(DurationFilter::Any),
        "shorts" => Some(DurationFilter::Shorts),
        "short" => Some(DurationFilter::Short),
        "medium" => Some(DurationFilter::Medium),
        "long" => Some(DurationFilter::Long),
        _ => None,
    }
}

fn max_results_from_key(key: &str) -> Option<u32> {
    key.parse()
        .ok()
        .filter(|n| MAX_RESULTS_CHOICES.contains(n))
}

/// Filter values as the user entered them. Free-text bounds are parsed when a request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub order: Order,
    pub max_results: u32,
    pub duration: DurationFilter,
    pub min_view_count: String,
    pub max_view_count: String,
    pub published_after: String,
    pub published_before: String,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            order: Order::Relevance,
            max_results: DEFAULT_MAX_RESULTS,
            duration: DurationFilter::Any,
            min_view_count: String::new(),
            max_view_count: String::new(),
            published_after: String::new(),
            published_before: String::new(),
        }
    }
}

impl SearchFilters {
    pub fn min_view_count(&self) -> Option<u64> {
        parse_view_count(&self.min_view_count)
    }

    pub fn max_view_count(&self) -> Option<u64> {
        parse_view_count(&self.max_view_count)
    }

    pub fn published_after(&self) -> Option<DateTime<Utc>> {
        let start_of_day = NaiveTime::from_hms_opt(0, 0, 0)?;
        parse_day(&self.published_after, start_of_day)
    }

    pub fn published_before(&self) -> Option<DateTime<Utc>> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)?;
        parse_day(&self.published_before, end_of_day)
    }
}

pub fn parse_view_count(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}

fn parse_day(input: &str, time: NaiveTime) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(time).and_utc())
}

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

fn input_callback(callback: &Callback<String>) -> Callback<InputEvent> {
    let callback = callback.clone();
    Callback::from(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        callback.emit(value);
    })
}

#[derive(Properties, PartialEq)]
pub struct SearchOptionsProps {
    pub filters: SearchFilters,
    pub disabled: bool,
    pub on_order_change: Callback<Order>,
    pub on_max_results_change: Callback<u32>,
    pub on_duration_change: Callback<DurationFilter>,
    pub on_min_view_count_input: Callback<String>,
    pub on_max_view_count_input: Callback<String>,
    pub on_published_after_input: Callback<String>,
    pub on_published_before_input: Callback<String>,
}

#[function_component(SearchOptionsDropdowns)]
pub fn search_options(props: &SearchOptionsProps) -> Html {
    let on_order_change_cb = props.on_order_change.clone();
    let on_order_change = Callback::from(move |e: Event| {
        if let Some(order) = event_value(&e).as_deref().and_then(order_from_key) {
            on_order_change_cb.emit(order);
        }
    });

    let on_max_results_change_cb = props.on_max_results_change.clone();
    let on_max_results_change = Callback::from(move |e: Event| {
        if let Some(max) = event_value(&e).as_deref().and_then(max_results_from_key) {
            on_max_results_change_cb.emit(max);
        }
    });

    let on_duration_change_cb = props.on_duration_change.clone();
    let on_duration_change = Callback::from(move |e: Event| {
        if let Some(duration) = event_value(&e).as_deref().and_then(duration_from_key) {
            on_duration_change_cb.emit(duration);
        }
    });

    let filters = &props.filters;

    html! {
        <div class="filters">
            <label class="filter-group">
                { "Sort by" }
                <select onchange={on_order_change} disabled={props.disabled}>
                    {
                        for order_choices().into_iter().map(|order| html! {
                            <option value={order.as_str()} selected={order == filters.order}>
                                { order_display_name(&order) }
                            </option>
                        })
                    }
                </select>
            </label>

            <label class="filter-group">
                { "Results per page" }
                <select onchange={on_max_results_change} disabled={props.disabled}>
                    {
                        for MAX_RESULTS_CHOICES.iter().map(|max| html! {
                            <option value={max.to_string()} selected={*max == filters.max_results}>
                                { max.to_string() }
                            </option>
                        })
                    }
                </select>
            </label>

            <label class="filter-group">
                { "Duration" }
                <select onchange={on_duration_change} disabled={props.disabled}>
                    {
                        for DurationFilter::all_variants().into_iter().map(|duration| html! {
                            <option value={duration_key(&duration)} selected={duration == filters.duration}>
                                { duration.display_name() }
                            </option>
                        })
                    }
                </select>
            </label>

            <label class="filter-group">
                { "Min views" }
                <input
                    type="number"
                    min="0"
                    placeholder="e.g. 1000"
                    value={filters.min_view_count.clone()}
                    oninput={input_callback(&props.on_min_view_count_input)}
                />
            </label>

            <label class="filter-group">
                { "Max views" }
                <input
                    type="number"
                    min="0"
                    placeholder="e.g. 1000000"
                    value={filters.max_view_count.clone()}
                    oninput={input_callback(&props.on_max_view_count_input)}
                />
            </label>

            <label class="filter-group">
                { "Published after" }
                <input
                    type="date"
                    value={filters.published_after.clone()}
                    oninput={input_callback(&props.on_published_after_input)}
                />
            </label>

            <label class="filter-group">
                { "Published before" }
                <input
                    type="date"
                    value={filters.published_before.clone()}
                    oninput={input_callback(&props.on_published_before_input)}
                />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorts_maps_onto_short_bucket() {
        assert_eq!(DurationFilter::Shorts.to_request(), VideoDuration::Short);
        assert_eq!(DurationFilter::Short.to_request(), VideoDuration::Short);
        assert_eq!(DurationFilter::Any.to_request(), VideoDuration::Any);
        assert_eq!(DurationFilter::Long.to_request(), VideoDuration::Long);
    }

    #[test]
    fn test_option_keys_round_trip() {
        for duration in DurationFilter::all_variants() {
            assert_eq!(duration_from_key(duration_key(&duration)), Some(duration));
        }
        for order in order_choices() {
            assert_eq!(order_from_key(order.as_str()), Some(order));
        }
        assert_eq!(order_from_key("popularity"), None);
    }

    #[test]
    fn test_max_results_only_accepts_offered_choices() {
        assert_eq!(max_results_from_key("50"), Some(50));
        assert_eq!(max_results_from_key("7"), None);
        assert_eq!(max_results_from_key("ten"), None);
    }

    #[test]
    fn test_view_count_bounds_ignore_non_numeric_input() {
        let filters = SearchFilters {
            min_view_count: " 1000 ".to_string(),
            max_view_count: "lots".to_string(),
            ..SearchFilters::default()
        };
        assert_eq!(filters.min_view_count(), Some(1000));
        assert_eq!(filters.max_view_count(), None);
    }

    #[test]
    fn test_published_bounds_cover_whole_days() {
        let filters = SearchFilters {
            published_after: "2024-01-01".to_string(),
            published_before: "2024-01-31".to_string(),
            ..SearchFilters::default()
        };
        assert_eq!(
            filters.published_after().unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
        assert_eq!(
            filters.published_before().unwrap().to_rfc3339(),
            "2024-01-31T23:59:59+00:00"
        );
        assert_eq!(SearchFilters::default().published_after(), None);
    }
}
