//! Typed view of the upstream `player_info_api` payload.
//!
//! The upstream shape is undocumented and drifts between game versions, so
//! every group defaults to empty when missing or not an object, and every leaf
//! is kept as a raw [`Value`] for the normalizer to stringify.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a nested group, falling back to `T::default()` unless the
/// value is a JSON object.
fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_object(value))
}

fn from_object<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        T::default()
    }
}

/// Contents of the top-level `player_info` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerInfo {
    #[serde(deserialize_with = "object_or_default")]
    pub basic_info: BasicInfo,
    #[serde(deserialize_with = "object_or_default")]
    pub pet_info: PetInfoRaw,
    #[serde(deserialize_with = "object_or_default")]
    pub profile_info: ProfileInfoRaw,
    #[serde(deserialize_with = "object_or_default")]
    pub social_info: SocialInfoRaw,
    #[serde(deserialize_with = "object_or_default")]
    pub credit_score_info: CreditScoreInfo,
    #[serde(deserialize_with = "object_or_default")]
    pub diamond_cost_res: DiamondCostRes,
}

impl PlayerInfo {
    /// Pull `player_info` out of a full response body.
    ///
    /// Anything other than an object under that key (including the key being
    /// absent, or the body itself not being an object) yields an empty record.
    pub fn from_payload(body: &Value) -> Self {
        body.get("player_info")
            .map_or_else(Self::default, |info| Self::from_value(info.clone()))
    }

    /// Interpret a bare `player_info` object.
    pub fn from_value(value: Value) -> Self {
        from_object(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    pub nickname: Option<Value>,
    pub account_id: Option<Value>,
    pub region: Option<Value>,
    pub level: Option<Value>,
    pub liked: Option<Value>,
    pub rank: Option<Value>,
    pub max_rank: Option<Value>,
    pub cs_rank: Option<Value>,
    pub exp: Option<Value>,
    pub create_at: Option<Value>,
    pub last_login_at: Option<Value>,
    pub ranking_points: Option<Value>,
    pub release_version: Option<Value>,
    pub season_id: Option<Value>,
    #[serde(deserialize_with = "object_or_default")]
    pub prime_level: PrimeLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrimeLevel {
    pub level: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetInfoRaw {
    pub name: Option<Value>,
    pub level: Option<Value>,
    pub exp: Option<Value>,
    pub skin_id: Option<Value>,
    pub selected_skill_id: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileInfoRaw {
    pub avatar_id: Option<Value>,
    pub clothes: Option<Value>,
    /// Upstream spells it this way.
    pub equiped_skills: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialInfoRaw {
    pub battle_tag: Option<Value>,
    pub battle_tag_count: Option<Value>,
    pub language: Option<Value>,
    pub rank_show: Option<Value>,
    pub signature: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditScoreInfo {
    pub credit_score: Option<Value>,
    pub reward_state: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiamondCostRes {
    pub diamond_cost: Option<Value>,
}
