//! Reaction counting.
//!
//! Counts are always derived by a full pass over a target's current reaction
//! set. Nothing in the client increments or decrements a displayed count in
//! place; any update replaces the tally with a fresh one computed here.

use crate::feed::types::{Reaction, ReactionKind};

/// Aggregate like/dislike counts for one reactable target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionTally {
    pub likes: u64,
    pub dislikes: u64,
}

/// Count likes and dislikes in a reaction set.
///
/// Pure and total: an empty slice yields `{0, 0}`, and unrecognized reaction
/// kinds are counted by neither bucket.
pub fn tally(reactions: &[Reaction]) -> ReactionTally {
    let mut out = ReactionTally::default();
    for reaction in reactions {
        match reaction.reaction_type {
            ReactionKind::Like => out.likes += 1,
            ReactionKind::Dislike => out.dislikes += 1,
            ReactionKind::Other(_) => {}
        }
    }
    out
}
