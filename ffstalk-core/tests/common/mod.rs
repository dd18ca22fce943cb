//! 共享测试工具和辅助函数
//!
//! [`FakeUpstream`] is a minimal `axum` server on a random 127.0.0.1 port that
//! stands in for `player_info_api`: it answers with a canned reply and records
//! every request's query string and headers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use ffstalk_core::ClientConfig;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// What the fake upstream answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with a JSON body.
    Json(Value),
    /// 200 with an arbitrary body labelled as JSON.
    Raw(String),
    /// Given status code and body.
    Status(u16, String),
}

/// One request as seen by the fake upstream.
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub query: HashMap<String, String>,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
}

#[derive(Debug)]
struct UpstreamState {
    reply: Reply,
    requests: Vec<RecordedRequest>,
}

/// Handle to the running fake upstream.
#[derive(Debug)]
pub struct FakeUpstream {
    addr: SocketAddr,
    state: Arc<Mutex<UpstreamState>>,
}

impl FakeUpstream {
    /// Start serving `reply` on a random port. Returns once listening.
    pub async fn start(reply: Reply) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(UpstreamState {
            reply,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/player_info_api", get(player_info))
            .with_state(state.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, state })
    }

    /// e.g. `http://127.0.0.1:PORT`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Default config pointed at this server.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::default().with_base_url(self.base_url())
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }
}

/// Base URL of a port nothing listens on, for connection-refused tests.
pub async fn unreachable_base_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

async fn player_info(
    State(state): State<Arc<Mutex<UpstreamState>>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.lock().await;
    state.requests.push(RecordedRequest {
        query,
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
    });

    match state.reply.clone() {
        Reply::Json(body) => (StatusCode::OK, axum::Json(body)).into_response(),
        Reply::Raw(body) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            body,
        )
            .into_response(),
        Reply::Status(code, body) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response(),
    }
}

/// Trimmed-down real response for uid 470699855.
pub fn sample_payload() -> Value {
    serde_json::json!({
        "player_info": {
            "basicInfo": {
                "accountId": "470699855",
                "nickname": "ᴍɪᴋᴀ",
                "region": "ID",
                "level": 68,
                "exp": 3_051_440,
                "liked": 5280,
                "rank": 321,
                "maxRank": 321,
                "csRank": 324,
                "rankingPoints": 4195,
                "createAt": "1565352712",
                "lastLoginAt": "1700000000",
                "releaseVersion": "OB45",
                "seasonId": 41,
                "primeLevel": {"level": 4}
            },
            "petInfo": {
                "name": "Rockie",
                "level": 7,
                "exp": 6000,
                "skinId": 1_310_000_000_u64,
                "selectedSkillId": 1_315_000_009_u64
            },
            "profileInfo": {
                "avatarId": 902_000_306,
                "clothes": [211_000_000, 214_000_000, 208_000_000],
                "equipedSkills": [16, 706, 8, 1]
            },
            "socialInfo": {
                "battleTag": ["Rusher", "Sniper", "Support"],
                "battleTagCount": [12, 3],
                "language": "Language_ID",
                "rankShow": "RankShow_BR",
                "signature": "no lag no life"
            },
            "creditScoreInfo": {
                "creditScore": 100,
                "rewardState": "REWARD_STATE_UNCLAIMED"
            },
            "diamondCostRes": {"diamondCost": 390}
        }
    })
}
