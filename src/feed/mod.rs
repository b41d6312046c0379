//! Feed data model and views.
//!
//! This module owns everything about the forum feed that is independent of
//! transport and terminal rendering:
//!
//! - **Types**: the category→post→comment graph as deserialized from the
//!   feed endpoint, including reaction records
//! - **Model**: the single live snapshot and its two read views (all posts
//!   newest-first, single category)
//! - **Reactions**: pure like/dislike tallying over a reaction set
//!
//! # Module Structure
//!
//! - [`types`] - Wire/payload types (`FeedSnapshot`, `Post`, `Reaction`, ...)
//! - [`model`] - `FeedModel` snapshot holder and its views
//! - [`reactions`] - `tally` and `ReactionTally`

pub mod model;
pub mod reactions;
pub mod types;

pub use model::{FeedModel, ModelError, PostRef};
pub use reactions::{tally, ReactionTally};
pub use types::{Category, Comment, FeedSnapshot, Post, Reaction, ReactionKind, TargetKind};
