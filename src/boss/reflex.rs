//! Reflex-minigame bridge state owned by Attack2.

use crate::minigame::{ReflexMinigame, ReflexOutcome};

/// Transient per-entry session record. `resolution` doubles as the one-shot
/// latch: once set, a duplicate completion signal cannot double-apply damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexSession {
    resolution: Option<ReflexOutcome>,
}

impl ReflexSession {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Resolve the session from the controller's state. Returns the outcome
    /// only on the first resolution; later calls are no-ops.
    ///
    /// `watchdog_fired` is the hard timeout for a controller that never
    /// signals completion; a forced resolution always counts as failure.
    pub fn try_resolve(
        &mut self,
        minigame: &ReflexMinigame,
        watchdog_fired: bool,
    ) -> Option<ReflexOutcome> {
        if self.resolution.is_some() {
            return None;
        }

        // Double guard: either the completion flag or the controller having
        // stopped on its own counts as a finished session.
        let signalled = minigame.is_completed() || !minigame.is_running();
        if !signalled && !watchdog_fired {
            return None;
        }

        let outcome = if !watchdog_fired && minigame.target_reached() {
            ReflexOutcome::Success
        } else {
            ReflexOutcome::Failure
        };
        self.resolution = Some(outcome);
        Some(outcome)
    }
}
