//! Player info lookup against `player_info_api`.

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::FfStalkResult;
use crate::http_client::HttpUtils;
use crate::normalizer::normalize_payload;
use crate::types::AccountRecord;

/// Headers the upstream expects from its own web frontend. Requests without
/// them are rejected by its bot filter.
pub const UPSTREAM_HEADERS: &[(&str, &str)] = &[
    ("Origin", "https://www.freefirecommunity.com"),
    ("Referer", "https://www.freefirecommunity.com/ff-account-info/"),
    ("User-Agent", "Mozilla/5.0 (Linux; Android 10; K)"),
    ("Accept", "*/*"),
    ("Accept-Encoding", "gzip, deflate, br"),
];

fn with_upstream_headers(builder: RequestBuilder) -> RequestBuilder {
    UPSTREAM_HEADERS
        .iter()
        .fold(builder, |req, (name, value)| req.header(*name, *value))
}

/// Fetch and normalize one player. Exactly one request, no retries.
pub async fn fetch_player(
    client: &Client,
    config: &ClientConfig,
    uid: &str,
) -> FfStalkResult<AccountRecord> {
    let url = config.player_info_url(uid);
    let request = with_upstream_headers(client.get(&url));

    let body = HttpUtils::execute_request(request, &url).await?;
    let payload: Value = HttpUtils::parse_json(&body)?;

    if payload.get("player_info").is_none() {
        log::warn!("[upstream] Response for uid {uid} has no player_info, using empty record");
    }

    Ok(normalize_payload(&payload, uid, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_headers_attached() {
        let client = Client::new();
        let request = with_upstream_headers(client.get("http://127.0.0.1/player_info_api"))
            .build()
            .ok();
        let headers = request.as_ref().map(reqwest::Request::headers);
        let get = |name: &str| {
            headers
                .and_then(|h| h.get(name))
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        assert_eq!(
            get("origin").as_deref(),
            Some("https://www.freefirecommunity.com")
        );
        assert_eq!(
            get("referer").as_deref(),
            Some("https://www.freefirecommunity.com/ff-account-info/")
        );
        assert_eq!(
            get("user-agent").as_deref(),
            Some("Mozilla/5.0 (Linux; Android 10; K)")
        );
        assert_eq!(get("accept").as_deref(), Some("*/*"));
        assert_eq!(get("accept-encoding").as_deref(), Some("gzip, deflate, br"));
    }
}
