use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Order {
    Date,
    Rating,
    #[default]
    Relevance,
    Title,
    VideoCount,
    ViewCount,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Date => "date",
            Order::Rating => "rating",
            Order::Relevance => "relevance",
            Order::Title => "title",
            Order::VideoCount => "videoCount",
            Order::ViewCount => "viewCount",
        }
    }
}

/// Duration buckets understood by the upstream search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoDuration {
    #[default]
    Any,
    Short,
    Medium,
    Long,
}

impl VideoDuration {
    pub fn is_any(&self) -> bool {
        *self == VideoDuration::Any
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub keyword: String,
    pub max_results: u32,
    pub order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_before: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "VideoDuration::is_any")]
    pub video_duration: VideoDuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

/// Optional filters for the query-string flavour of the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub max_results: Option<u32>,
    pub order: Option<Order>,
    pub published_after: Option<DateTime<Utc>>,
    pub published_before: Option<DateTime<Utc>>,
    pub video_duration: Option<VideoDuration>,
    pub min_view_count: Option<u64>,
    pub max_view_count: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
    pub published_at: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub duration: Option<String>,
    pub subscriber_count: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub videos: Vec<VideoInfo>,
    #[serde(default)]
    pub total_results: u64,
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
}
