//! Player lookup entry points.
//!
//! [`PlayerInfoClient`] owns a reusable HTTP client plus the endpoint config.
//! [`fetch_account_details`] is the one-shot form against the public upstream.

mod player_info;

use std::sync::LazyLock;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::FfStalkResult;
use crate::normalizer::asset_urls;
use crate::types::{AccountRecord, AssetUrls};

pub use player_info::UPSTREAM_HEADERS;

/// Shared client for [`fetch_account_details`].
static DEFAULT_CLIENT: LazyLock<PlayerInfoClient> =
    LazyLock::new(|| PlayerInfoClient::new(ClientConfig::default()));

/// Client for the player info endpoint.
///
/// Cheap to clone; clones share the underlying connection pool. Calls are
/// independent and may run concurrently.
///
/// ```rust,no_run
/// use ffstalk_core::{ClientConfig, PlayerInfoClient};
/// # async fn demo() -> ffstalk_core::FfStalkResult<()> {
/// let client = PlayerInfoClient::new(ClientConfig::default());
/// let record = client.fetch_account("470699855").await?;
/// println!("{}", record.metadata.nickname);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PlayerInfoClient {
    http: Client,
    config: ClientConfig,
}

impl PlayerInfoClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Use a preconfigured `reqwest` client (proxy, custom TLS, ...).
    pub fn with_http_client(http: Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one player and normalize the response.
    ///
    /// Any transport, status or JSON failure is reported as
    /// [`FfStalkError::RetrievalFailure`](crate::FfStalkError::RetrievalFailure);
    /// there is no partial record.
    pub async fn fetch_account(&self, uid: &str) -> FfStalkResult<AccountRecord> {
        player_info::fetch_player(&self.http, &self.config, uid).await
    }

    /// Banner and outfit image URLs for `uid`, without touching the network.
    pub fn asset_urls(&self, uid: &str) -> AssetUrls {
        asset_urls(uid, &self.config)
    }
}

/// Fetch one player from the public upstream with the default config.
pub async fn fetch_account_details(uid: &str) -> FfStalkResult<AccountRecord> {
    DEFAULT_CLIENT.fetch_account(uid).await
}
