//! Implementation blocks for content addressing types.

/// ContentId implementation: Display, FromStr, Serialize, Deserialize.
pub mod content_id;
