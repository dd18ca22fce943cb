//! Upstream endpoint configuration.
//!
//! [`ClientConfig::default`] points at the public community API with the
//! Indonesian region, which is what the upstream serves without complaint.
//! Tests and mirrors swap the base URL with [`ClientConfig::with_base_url`].

/// Public host serving player info and image endpoints.
pub const DEFAULT_BASE_URL: &str = "https://discordbot.freefirecommunity.com";

/// Region code sent with every request.
pub const DEFAULT_REGION: &str = "id";

const PLAYER_INFO_PATH: &str = "player_info_api";
const BANNER_IMAGE_PATH: &str = "banner_image_api";
const OUTFIT_IMAGE_PATH: &str = "outfit_image_api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,
    pub region: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// `GET` target for the player info lookup.
    pub fn player_info_url(&self, uid: &str) -> String {
        self.endpoint(PLAYER_INFO_PATH, uid)
    }

    pub fn banner_image_url(&self, uid: &str) -> String {
        self.endpoint(BANNER_IMAGE_PATH, uid)
    }

    pub fn outfit_image_url(&self, uid: &str) -> String {
        self.endpoint(OUTFIT_IMAGE_PATH, uid)
    }

    fn endpoint(&self, path: &str, uid: &str) -> String {
        format!(
            "{}/{path}?uid={}&region={}",
            self.base_url,
            urlencoding::encode(uid),
            urlencoding::encode(&self.region)
        )
    }
}
