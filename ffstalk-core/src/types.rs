//! Public types returned by player lookups.
//!
//! Every field is a plain owned value: the normalizer resolves absent upstream
//! data to a fallback before these structs are built, so there are no
//! `Option`s here.

use serde::{Deserialize, Serialize};

/// Normalized snapshot of a Free Fire account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub metadata: AccountMetadata,
    pub pet: PetInfo,
    pub profile: ProfileInfo,
    pub social: SocialInfo,
    pub credit: CreditInfo,
    pub assets: AssetUrls,
}

/// Basic account information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetadata {
    pub nickname: String,
    pub account_id: String,
    pub region: String,
    pub level: String,
    pub likes: String,
    pub rank: String,
    pub max_rank: String,
    pub cs_rank: String,
    pub exp: String,
    /// Account creation time, `YYYY-MM-DD HH:mm:ss` UTC.
    pub created_at: String,
    /// Last login time, `YYYY-MM-DD HH:mm:ss` UTC.
    pub last_login_at: String,
    pub ranking_points: String,
    pub release_version: String,
    pub season_id: String,
    /// Falls back to `"-"`.
    pub prime_level: String,
    /// Falls back to `"-"`.
    pub diamond_cost: String,
}

/// Pet details. Every field falls back to `"-"` since many accounts have no pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetInfo {
    pub name: String,
    pub level: String,
    pub exp: String,
    pub skin_id: String,
    pub skill_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub avatar_id: String,
    /// Clothing item ids, possibly empty.
    pub clothes: Vec<String>,
    /// Equipped skill ids, possibly empty.
    pub equipped_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInfo {
    pub battle_tags: Vec<BattleTag>,
    pub language: String,
    pub rank_show: String,
    pub signature: String,
}

/// A battle tag and how many times it was awarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleTag {
    pub tag: String,
    pub count: i64,
}

impl BattleTag {
    pub fn new(tag: impl Into<String>, count: i64) -> Self {
        Self {
            tag: tag.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditInfo {
    pub score: String,
    pub reward_state: String,
}

/// Image endpoints for the player. Built from the identifier alone, never fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUrls {
    pub banner_image_url: String,
    pub outfit_image_url: String,
}
