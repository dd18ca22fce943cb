//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by player lookups.
///
/// Normalization never fails, so the only thing that can go wrong is getting
/// the upstream payload in the first place.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum FfStalkError {
    /// Network error, non-success HTTP status or malformed JSON body.
    #[error("Failed to retrieve player data: {0}")]
    RetrievalFailure(String),
}

/// ffstalk Result 类型别名
pub type FfStalkResult<T> = std::result::Result<T, FfStalkError>;
