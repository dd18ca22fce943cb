//! Upstream payload → [`AccountRecord`] mapping.
//!
//! Everything in here is total: it runs on the already-defaulted
//! [`PlayerInfo`] view and every leaf goes through [`safe`] or
//! [`format_timestamp`], so no upstream shape can make it fail.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::types::{
    AccountMetadata, AccountRecord, AssetUrls, BattleTag, CreditInfo, PetInfo, ProfileInfo,
    SocialInfo,
};
use crate::upstream::{
    BasicInfo, CreditScoreInfo, DiamondCostRes, PetInfoRaw, PlayerInfo, ProfileInfoRaw,
    SocialInfoRaw,
};
use crate::utils::datetime::format_timestamp;
use crate::utils::number::json_floor;
use crate::utils::safe::{display_value, safe, FALLBACK, PLACEHOLDER};

/// Build a fully populated record from a `player_info` view.
///
/// `uid` is the identifier the caller asked for; it only feeds the asset URLs,
/// which are derived from `config` and never depend on the payload.
pub fn normalize_account(info: &PlayerInfo, uid: &str, config: &ClientConfig) -> AccountRecord {
    AccountRecord {
        metadata: metadata(&info.basic_info, &info.diamond_cost_res),
        pet: pet(&info.pet_info),
        profile: profile(&info.profile_info),
        social: social(&info.social_info),
        credit: credit(&info.credit_score_info),
        assets: asset_urls(uid, config),
    }
}

/// Normalize a full upstream response body (the object holding `player_info`).
pub fn normalize_payload(body: &Value, uid: &str, config: &ClientConfig) -> AccountRecord {
    normalize_account(&PlayerInfo::from_payload(body), uid, config)
}

fn metadata(basic: &BasicInfo, diamond: &DiamondCostRes) -> AccountMetadata {
    let field = |v: &Option<Value>| safe(v.as_ref(), FALLBACK);

    AccountMetadata {
        nickname: field(&basic.nickname),
        account_id: field(&basic.account_id),
        region: field(&basic.region),
        level: field(&basic.level),
        likes: field(&basic.liked),
        rank: field(&basic.rank),
        max_rank: field(&basic.max_rank),
        cs_rank: field(&basic.cs_rank),
        exp: field(&basic.exp),
        created_at: format_timestamp(basic.create_at.as_ref()),
        last_login_at: format_timestamp(basic.last_login_at.as_ref()),
        ranking_points: field(&basic.ranking_points),
        release_version: field(&basic.release_version),
        season_id: field(&basic.season_id),
        prime_level: safe(basic.prime_level.level.as_ref(), PLACEHOLDER),
        diamond_cost: safe(diamond.diamond_cost.as_ref(), PLACEHOLDER),
    }
}

fn pet(raw: &PetInfoRaw) -> PetInfo {
    let field = |v: &Option<Value>| safe(v.as_ref(), PLACEHOLDER);

    PetInfo {
        name: field(&raw.name),
        level: field(&raw.level),
        exp: field(&raw.exp),
        skin_id: field(&raw.skin_id),
        skill_id: field(&raw.selected_skill_id),
    }
}

fn profile(raw: &ProfileInfoRaw) -> ProfileInfo {
    ProfileInfo {
        avatar_id: safe(raw.avatar_id.as_ref(), FALLBACK),
        clothes: string_list(raw.clothes.as_ref()),
        equipped_skills: string_list(raw.equiped_skills.as_ref()),
    }
}

fn social(raw: &SocialInfoRaw) -> SocialInfo {
    SocialInfo {
        battle_tags: battle_tags(raw.battle_tag.as_ref(), raw.battle_tag_count.as_ref()),
        language: safe(raw.language.as_ref(), FALLBACK),
        rank_show: safe(raw.rank_show.as_ref(), FALLBACK),
        signature: safe(raw.signature.as_ref(), FALLBACK),
    }
}

fn credit(raw: &CreditScoreInfo) -> CreditInfo {
    CreditInfo {
        score: safe(raw.credit_score.as_ref(), FALLBACK),
        reward_state: safe(raw.reward_state.as_ref(), FALLBACK),
    }
}

/// Banner and outfit image URLs for `uid`.
pub fn asset_urls(uid: &str, config: &ClientConfig) -> AssetUrls {
    AssetUrls {
        banner_image_url: config.banner_image_url(uid),
        outfit_image_url: config.outfit_image_url(uid),
    }
}

/// Zip the tag list with its parallel count list.
///
/// A non-array `tags` gives no pairs. A count that is missing, null, or not
/// numeric at index *i* becomes 0; fractional counts are floored.
pub fn battle_tags(tags: Option<&Value>, counts: Option<&Value>) -> Vec<BattleTag> {
    let Some(Value::Array(tags)) = tags else {
        return Vec::new();
    };
    let counts: &[Value] = match counts {
        Some(Value::Array(counts)) => counts.as_slice(),
        _ => &[],
    };

    tags.iter()
        .enumerate()
        .map(|(i, tag)| BattleTag {
            tag: safe(Some(tag), FALLBACK),
            count: counts.get(i).and_then(json_floor).unwrap_or(0),
        })
        .collect()
}

/// Stringify each element of an array; anything else is an empty list.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(display_value).collect(),
        _ => Vec::new(),
    }
}
