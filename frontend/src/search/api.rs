use crate::config::API_BASE_URL;
use crate::error::SearchError;
use crate::models::{SearchOptions, SearchRequest, SearchResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::AbortSignal;

const SEARCH_ENDPOINT: &str = "/api/youtube/search";

/// Per-call extras: headers layered over the defaults and a cancellation signal.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub abort_signal: Option<AbortSignal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(API_BASE_URL.as_str())
    }

    pub async fn search_videos(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        self.search_videos_with(request, &RequestOptions::default())
            .await
    }

    pub async fn search_videos_with(
        &self,
        request: &SearchRequest,
        options: &RequestOptions,
    ) -> Result<SearchResponse, SearchError> {
        let body = serde_json::to_string(request)
            .map_err(|e| SearchError::Transport(format!("Failed to encode request: {e}")))?;
        let builder = Request::post(&self.url(SEARCH_ENDPOINT));
        self.send(builder, Some(body), options).await
    }

    pub async fn search_videos_get(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, SearchError> {
        let query = build_query_string(keyword, options)?;
        let builder = Request::get(&self.url(&format!("{SEARCH_ENDPOINT}?{query}")));
        self.send(builder, None, &RequestOptions::default()).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Result<T, SearchError> {
        let mut builder = builder.abort_signal(options.abort_signal.as_ref());
        for (name, value) in merge_headers(&options.headers) {
            builder = builder.header(&name, &value);
        }

        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| self.transport_error(e))?;

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        self.parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, SearchError> {
        if response.ok() {
            return response.json::<T>().await.map_err(|e| match e {
                gloo_net::Error::SerdeError(e) => SearchError::Decode(e.to_string()),
                other => self.transport_error(other),
            });
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = extract_error_message(status, &text);
        log::warn!("Search request failed: HTTP {status} - {message}");
        Err(SearchError::Api { status, message })
    }

    fn transport_error(&self, error: gloo_net::Error) -> SearchError {
        match error {
            gloo_net::Error::JsError(js) => classify_js_error(&js.name, &js.message, &self.base_url),
            gloo_net::Error::SerdeError(e) => SearchError::Decode(e.to_string()),
            other => SearchError::Transport(other.to_string()),
        }
    }
}

/// Default headers with caller headers applied on top; same-named headers are replaced.
pub fn merge_headers(extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    for (name, value) in extra {
        match headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => *slot = (name.clone(), value.clone()),
            None => headers.push((name.clone(), value.clone())),
        }
    }
    headers
}

/// Picks the most useful message out of a failed response body.
/// `message` wins over `error`; each is read on its own and only counts when it is a non-empty string.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };
        if let Some(message) = field("message").or_else(|| field("error")) {
            return message;
        }
    }

    if body.is_empty() {
        format!("HTTP error! status: {status}")
    } else {
        body.to_string()
    }
}

pub fn classify_js_error(name: &str, message: &str, base_url: &str) -> SearchError {
    if name == "AbortError" {
        SearchError::Aborted
    } else if name == "TypeError" || message == "Failed to fetch" {
        SearchError::Network {
            base_url: base_url.to_string(),
        }
    } else {
        SearchError::Transport(message.to_string())
    }
}

/// `keyword=...` followed by every option that is set, in wire spelling.
pub fn build_query_string(keyword: &str, options: &SearchOptions) -> Result<String, SearchError> {
    let mut params = vec![format!("keyword={}", urlencoding::encode(keyword))];

    let values = to_query_pairs(options)?;
    params.extend(
        values
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value))),
    );

    Ok(params.join("&"))
}

fn to_query_pairs<T: Serialize>(value: &T) -> Result<Vec<(String, String)>, SearchError> {
    let json = serde_json::to_value(value)
        .map_err(|e| SearchError::Transport(format!("Failed to encode query: {e}")))?;

    let serde_json::Value::Object(map) = json else {
        return Ok(Vec::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, VideoDuration};

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = r#"{"message":"quota exceeded","error":"Internal"}"#;
        assert_eq!(extract_error_message(500, body), "quota exceeded");
    }

    #[test]
    fn test_error_message_falls_back_to_error_field() {
        let body = r#"{"error":"Bad Request"}"#;
        assert_eq!(extract_error_message(400, body), "Bad Request");
    }

    #[test]
    fn test_error_message_ignores_non_string_sibling_field() {
        let nested = r#"{"message":"quota exceeded","error":{"code":403}}"#;
        assert_eq!(extract_error_message(403, nested), "quota exceeded");

        let flag = r#"{"message":"quota exceeded","error":true}"#;
        assert_eq!(extract_error_message(403, flag), "quota exceeded");
    }

    #[test]
    fn test_error_message_skips_non_string_message() {
        let body = r#"{"message":42,"error":"Forbidden"}"#;
        assert_eq!(extract_error_message(403, body), "Forbidden");

        let body = r#"{"message":"","error":{"code":500}}"#;
        assert_eq!(extract_error_message(500, body), body);
    }

    #[test]
    fn test_error_message_uses_raw_body_when_not_structured() {
        assert_eq!(
            extract_error_message(502, "upstream timed out"),
            "upstream timed out"
        );
        assert_eq!(
            extract_error_message(500, r#"{"detail":"nope"}"#),
            r#"{"detail":"nope"}"#
        );
    }

    #[test]
    fn test_error_message_generic_fallback_for_empty_body() {
        assert_eq!(extract_error_message(503, ""), "HTTP error! status: 503");
    }

    #[test]
    fn test_merge_headers_defaults_to_json() {
        assert_eq!(
            merge_headers(&[]),
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_merge_headers_caller_wins_on_conflict() {
        let extra = vec![
            ("content-type".to_string(), "text/plain".to_string()),
            ("X-Trace".to_string(), "abc".to_string()),
        ];
        let headers = merge_headers(&extra);
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers[0],
            ("content-type".to_string(), "text/plain".to_string())
        );
        assert_eq!(headers[1], ("X-Trace".to_string(), "abc".to_string()));
    }

    #[test]
    fn test_query_string_keyword_only() {
        let query = build_query_string("cute cats", &SearchOptions::default()).unwrap();
        assert_eq!(query, "keyword=cute%20cats");
    }

    #[test]
    fn test_query_string_includes_only_defined_options() {
        let options = SearchOptions {
            max_results: Some(25),
            order: Some(Order::ViewCount),
            video_duration: Some(VideoDuration::Short),
            min_view_count: Some(1000),
            ..SearchOptions::default()
        };
        let query = build_query_string("cats", &options).unwrap();

        assert!(query.starts_with("keyword=cats&"));
        assert!(query.contains("maxResults=25"));
        assert!(query.contains("order=viewCount"));
        assert!(query.contains("videoDuration=short"));
        assert!(query.contains("minViewCount=1000"));
        assert!(!query.contains("maxViewCount"));
        assert!(!query.contains("publishedAfter"));
        assert_eq!(query.matches('&').count(), 4);
    }

    #[test]
    fn test_classify_js_errors() {
        let base = "http://localhost:8080";
        assert_eq!(
            classify_js_error("TypeError", "Failed to fetch", base),
            SearchError::Network {
                base_url: base.to_string()
            }
        );
        assert_eq!(
            classify_js_error("AbortError", "The user aborted a request.", base),
            SearchError::Aborted
        );
        assert_eq!(
            classify_js_error("SyntaxError", "Unexpected token", base),
            SearchError::Transport("Unexpected token".to_string())
        );
    }

    #[test]
    fn test_client_joins_endpoint_to_base_url() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(
            client.url(SEARCH_ENDPOINT),
            "http://localhost:8080/api/youtube/search"
        );
    }
}
