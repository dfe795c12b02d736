/// One-shot entrance latch. Only ever moves `NotRevealed -> Revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

impl RevealState {
    /// Starting state for an observed element. Without a visibility
    /// observer nothing would ever reveal it, so it starts revealed.
    pub fn initial(observer_available: bool) -> Self {
        if observer_available {
            RevealState::NotRevealed
        } else {
            RevealState::Revealed
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Returns true only on the transition.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.is_revealed();
        *self = RevealState::Revealed;
        changed
    }

    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting {
            self.reveal()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_is_one_shot() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed());

        assert!(!state.observe(false));
        assert_eq!(state, RevealState::NotRevealed);

        assert!(state.observe(true));
        assert!(state.is_revealed());

        assert!(!state.observe(false));
        assert!(state.is_revealed());

        assert!(!state.observe(true));
        assert!(!state.reveal());
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn starts_revealed_without_observer() {
        let mut state = RevealState::initial(false);
        assert!(state.is_revealed());
        assert!(!state.observe(false));
        assert!(state.is_revealed());

        let state = RevealState::initial(true);
        assert_eq!(state, RevealState::default());
        assert!(!state.is_revealed());
    }
}
