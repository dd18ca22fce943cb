//! Small total helpers shared by the normalizer and the fetcher.

pub mod datetime;
pub mod excerpt;
pub mod number;
pub mod safe;
