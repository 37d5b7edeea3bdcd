//! Submit control state shared by both form views.

/// `Idle -> Submitting -> Idle`; `Disabled` whenever the validator
/// rejects the current draft. There is no persistent submitted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// The draft is invalid; submitting cannot reach the network.
    Disabled,
    /// Ready to submit.
    Idle,
    /// A request is in flight; submission is disabled meanwhile.
    Submitting,
}

pub(crate) fn submit_state(draft_valid: bool, in_flight: bool) -> SubmitState {
    if in_flight {
        SubmitState::Submitting
    } else if !draft_valid {
        SubmitState::Disabled
    } else {
        SubmitState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_wins() {
        assert_eq!(submit_state(true, true), SubmitState::Submitting);
        assert_eq!(submit_state(false, true), SubmitState::Submitting);
    }

    #[test]
    fn test_invalid_draft_disables() {
        assert_eq!(submit_state(false, false), SubmitState::Disabled);
        assert_eq!(submit_state(true, false), SubmitState::Idle);
    }
}
