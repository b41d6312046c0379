//! Application event handling.
//!
//! Processes background task completions — reaction submit results — and
//! routes them through the binder registry. All failures in this layer are
//! reported through tracing and leave the displayed counts untouched; none
//! of them interrupt the UI.

use crate::app::{App, AppEvent};
use crate::ui::binder::ApplyOutcome;

/// Handle application events from background tasks.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::ReactionConfirmed {
            key,
            generation,
            token,
            reactions,
        } => match app.binders.apply(key, generation, token, &reactions) {
            ApplyOutcome::Applied => {
                tracing::debug!(
                    target_id = key.target_id,
                    kind = %key.kind,
                    token = token,
                    "Reaction confirmed, counts updated"
                );
            }
            outcome @ (ApplyOutcome::StaleGeneration | ApplyOutcome::StaleToken) => {
                // Response for a discarded render or an out-of-date click;
                // dropping it is the whole point of the token guard.
                tracing::debug!(
                    target_id = key.target_id,
                    kind = %key.kind,
                    token = token,
                    ?outcome,
                    "Dropped stale reaction response"
                );
            }
        },
        AppEvent::ReactionFailed { key, error } => {
            tracing::warn!(
                target_id = key.target_id,
                kind = %key.kind,
                error = %error,
                "Reaction failed, counts unchanged"
            );
        }
    }
}
