//! Reaction control bindings.
//!
//! Every rendered post/comment registers its like/dislike controls here,
//! keyed by target identity. The registry is the single source of truth for
//! displayed counts: a binding's tally is replaced wholesale from a server
//! response, never incremented in place.
//!
//! Rebinding is idempotent by construction — binding a key that is already
//! bound replaces the old binding, so one logical target can never have two
//! live handler registrations. Each binding carries a generation (bumped on
//! every rebind) and issues monotonically increasing request tokens;
//! responses are applied only when both still match, which drops both
//! responses aimed at a discarded render and out-of-order responses from
//! rapid clicks (latest token wins).

use crate::api::ApiClient;
use crate::app::AppEvent;
use crate::feed::{tally, Reaction, ReactionKind, ReactionTally, TargetKind};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Identity of a reactable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingKey {
    pub target_id: i64,
    pub kind: TargetKind,
}

impl BindingKey {
    pub fn post(target_id: i64) -> Self {
        Self {
            target_id,
            kind: TargetKind::Post,
        }
    }

    pub fn comment(target_id: i64) -> Self {
        Self {
            target_id,
            kind: TargetKind::Comment,
        }
    }
}

/// One live binding: the displayed tally plus the staleness guards.
#[derive(Debug)]
struct Binding {
    tally: ReactionTally,
    generation: u64,
    last_issued: u64,
}

/// Permission to submit one reaction request on behalf of a binding.
///
/// Carries everything a background task needs to report back, and everything
/// the registry needs to decide whether the response is still current.
#[derive(Debug, Clone, Copy)]
pub struct ReactionTicket {
    pub key: BindingKey,
    pub generation: u64,
    pub token: u64,
}

/// Outcome of applying a server response to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The tally was recomputed and replaced.
    Applied,
    /// The binding was rebound (or removed) after this request was issued.
    StaleGeneration,
    /// A later request was issued for the same binding; latest token wins.
    StaleToken,
}

/// Registry of reaction-control bindings, keyed by element identity.
#[derive(Debug, Default)]
pub struct BinderRegistry {
    bindings: HashMap<BindingKey, Binding>,
    // Registry-global so a cleared-and-rebound key never reuses a generation.
    next_generation: u64,
}

impl BinderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind (or rebind) a key, displaying counts computed from
    /// `initial_reactions`. A previous binding for the key is discarded.
    pub fn bind(&mut self, key: BindingKey, initial_reactions: &[Reaction]) {
        let generation = self.next_generation;
        self.next_generation += 1;
        let previous = self.bindings.insert(
            key,
            Binding {
                tally: tally(initial_reactions),
                generation,
                last_issued: 0,
            },
        );
        if previous.is_some() {
            tracing::debug!(target_id = key.target_id, kind = %key.kind, "Rebound reaction controls");
        }
    }

    /// Discard every binding. Generations keep advancing, so responses to
    /// requests issued before the clear can never match a later binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Displayed tally for a bound key.
    pub fn tally(&self, key: BindingKey) -> Option<ReactionTally> {
        self.bindings.get(&key).map(|b| b.tally)
    }

    pub fn is_bound(&self, key: BindingKey) -> bool {
        self.bindings.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Issue a request token for a click on a bound control.
    ///
    /// Tokens are per-binding and strictly increasing; the registry only
    /// honors the response carrying the highest token it has issued.
    pub fn issue(&mut self, key: BindingKey) -> Option<ReactionTicket> {
        let binding = self.bindings.get_mut(&key)?;
        binding.last_issued += 1;
        Some(ReactionTicket {
            key,
            generation: binding.generation,
            token: binding.last_issued,
        })
    }

    /// Apply a server-confirmed reaction set for a previously issued ticket.
    ///
    /// The tally is recomputed from `reactions` only if the ticket still
    /// refers to the live binding and no later token has been issued for it.
    pub fn apply(
        &mut self,
        key: BindingKey,
        generation: u64,
        token: u64,
        reactions: &[Reaction],
    ) -> ApplyOutcome {
        let Some(binding) = self.bindings.get_mut(&key) else {
            return ApplyOutcome::StaleGeneration;
        };
        if binding.generation != generation {
            return ApplyOutcome::StaleGeneration;
        }
        if binding.last_issued != token {
            return ApplyOutcome::StaleToken;
        }
        binding.tally = tally(reactions);
        ApplyOutcome::Applied
    }
}

/// Submit one reaction in the background and report back on the app channel.
///
/// One network call per invocation, no retry. The event loop routes the
/// result through [`BinderRegistry::apply`], so a response that arrives
/// after a re-render or a faster later click changes nothing.
pub fn spawn_submit(
    client: ApiClient,
    ticket: ReactionTicket,
    reaction: ReactionKind,
    event_tx: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = client
            .submit_reaction(ticket.key.target_id, ticket.key.kind, reaction)
            .await;

        let event = match result {
            Ok(reactions) => AppEvent::ReactionConfirmed {
                key: ticket.key,
                generation: ticket.generation,
                token: ticket.token,
                reactions,
            },
            Err(e) => AppEvent::ReactionFailed {
                key: ticket.key,
                error: e.to_string(),
            },
        };

        if let Err(e) = event_tx.send(event).await {
            tracing::warn!(error = %e, "Failed to send reaction result (receiver dropped)");
        }
    });
}
