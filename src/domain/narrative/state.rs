use crate::domain::errors::{NarrativeError, NarrativeResult};

/// Lifecycle of the single outstanding narrative request of a view.
///
/// `Idle | Resolved | Failed -> Pending` on `begin`, `Pending -> Resolved |
/// Failed` on completion. Re-entry while pending is rejected, and
/// completions arriving outside `Pending` are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NarrativeState {
    #[default]
    Idle,
    Pending,
    Resolved(String),
    /// Holds the fallback text shown in place of a narrative
    Failed(String),
}

impl NarrativeState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Text to display, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Resolved(text) | Self::Failed(text) => Some(text),
            Self::Idle | Self::Pending => None,
        }
    }

    pub fn has_result(&self) -> bool {
        self.text().is_some()
    }

    pub fn begin(&mut self) -> NarrativeResult<()> {
        if self.is_pending() {
            return Err(NarrativeError::AlreadyPending);
        }
        *self = Self::Pending;
        Ok(())
    }

    /// Returns `false` when the completion was stale and got dropped
    pub fn resolve(&mut self, text: String) -> bool {
        self.complete(Self::Resolved(text))
    }

    /// Returns `false` when the completion was stale and got dropped
    pub fn fail(&mut self, fallback: String) -> bool {
        self.complete(Self::Failed(fallback))
    }

    /// Clear a finished result (language switch). A pending request is
    /// left to finish.
    pub fn reset(&mut self) {
        if !self.is_pending() {
            *self = Self::Idle;
        }
    }

    fn complete(&mut self, next: Self) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut state = NarrativeState::default();
        assert_eq!(state, NarrativeState::Idle);
        state.begin().unwrap();
        assert!(state.is_pending());
        assert!(state.resolve("## Verdict".into()));
        assert_eq!(state.text(), Some("## Verdict"));

        // refresh after a result
        state.begin().unwrap();
        assert!(state.fail("fallback".into()));
        assert_eq!(state, NarrativeState::Failed("fallback".into()));
    }

    #[test]
    fn reentry_is_rejected() {
        let mut state = NarrativeState::Idle;
        state.begin().unwrap();
        assert_eq!(state.begin(), Err(NarrativeError::AlreadyPending));
        assert!(state.is_pending());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut state = NarrativeState::Idle;
        assert!(!state.resolve("late".into()));
        assert_eq!(state, NarrativeState::Idle);
    }

    #[test]
    fn reset_keeps_pending() {
        let mut state = NarrativeState::Resolved("old".into());
        state.reset();
        assert_eq!(state, NarrativeState::Idle);

        state.begin().unwrap();
        state.reset();
        assert!(state.is_pending());
    }
}
