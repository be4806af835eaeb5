//! Session lifecycle.

use crate::state_enum;

state_enum! {
    /// Whether a session can take input.
    ///
    /// A session starts `Uninitialized`, becomes `Ready` once its evaluator
    /// is loaded, and ends in `Failed` when loading fails or the evaluator
    /// reports a fatal error.
    #[derive(Copy, Eq)]
    pub enum Lifecycle {
        Uninitialized,
        Ready,
        Failed,
    }
    final: [Failed]
    error: [Failed]
}

impl Lifecycle {
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn only_ready_accepts_input() {
        assert!(!Lifecycle::Uninitialized.accepts_input());
        assert!(Lifecycle::Ready.accepts_input());
        assert!(!Lifecycle::Failed.accepts_input());
    }

    #[test]
    fn failed_is_final_error_state() {
        assert!(Lifecycle::Failed.is_final());
        assert!(Lifecycle::Failed.is_error());
        assert!(!Lifecycle::Ready.is_final());
        assert!(!Lifecycle::Uninitialized.is_error());
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(Lifecycle::Uninitialized.name(), "Uninitialized");
        assert_eq!(Lifecycle::Ready.name(), "Ready");
        assert_eq!(Lifecycle::Failed.to_string(), "Failed");
    }
}
