use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Reaction Wire Enums
// ============================================================================

/// Reaction kind as carried on the wire (integer-tagged).
///
/// The service encodes reactions as small integers: `1` = like, `2` = dislike.
/// Anything else deserializes as `Other` and is counted by neither tally
/// bucket, so an unrecognized kind can never inflate a displayed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
    Other(i64),
}

impl ReactionKind {
    pub fn as_i64(self) -> i64 {
        match self {
            ReactionKind::Like => 1,
            ReactionKind::Dislike => 2,
            ReactionKind::Other(v) => v,
        }
    }

    pub fn from_i64(v: i64) -> Self {
        match v {
            1 => ReactionKind::Like,
            2 => ReactionKind::Dislike,
            other => ReactionKind::Other(other),
        }
    }
}

impl Serialize for ReactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl<'de> Deserialize<'de> for ReactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(ReactionKind::from_i64(i64::deserialize(deserializer)?))
    }
}

/// What a reaction is attached to (string-tagged on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Post => f.write_str("post"),
            TargetKind::Comment => f.write_str("comment"),
        }
    }
}

// ============================================================================
// Feed Payload Types
// ============================================================================

/// One recorded reaction.
///
/// Only `reaction_type` is semantically required: the feed payload attributes
/// reactions to users (`username`, `created_at`) while the reaction endpoint
/// echoes target identification (`target_id`, `target_type`). Counts are
/// always derived by a full pass over the current set, never incremented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub reaction_type: ReactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Reaction {
    /// Bare reaction with only the kind set, as the reaction endpoint may
    /// return minimal records.
    pub fn of_kind(kind: ReactionKind) -> Self {
        Self {
            reaction_type: kind,
            target_id: None,
            target_type: None,
            username: None,
            created_at: None,
        }
    }
}

/// A comment under a post. Comments never nest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

/// A post within a category.
///
/// `category_name` is denormalized by the service for display; the feed
/// header line is "{username} posted in {category_name}".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub category_id: i64,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Root of the feed payload. Held by `FeedModel` as the one live snapshot,
/// replaced wholesale on refetch and never merged incrementally.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
}
