//! Free Fire player lookup.
//!
//! Fetches a player record from the community `player_info_api` and
//! normalizes its loosely shaped JSON into an [`AccountRecord`] where every
//! field is present. Missing data becomes `"N/A"` (or `"-"` for pet, prime
//! level and diamond cost), lists default to empty.

mod config;
mod error;
mod http_client;
mod normalizer;
mod services;
mod types;
mod upstream;
mod utils;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_REGION};
pub use error::{FfStalkError, FfStalkResult};
pub use normalizer::{asset_urls, battle_tags, normalize_account, normalize_payload, string_list};
pub use services::{fetch_account_details, PlayerInfoClient, UPSTREAM_HEADERS};
pub use types::{
    AccountMetadata, AccountRecord, AssetUrls, BattleTag, CreditInfo, PetInfo, ProfileInfo,
    SocialInfo,
};
pub use upstream::PlayerInfo;
pub use utils::datetime::format_timestamp;
pub use utils::safe::{display_value, safe, FALLBACK, PLACEHOLDER};
