// transition.rs - Anti-flicker choreography
//
// A mode change is spread over separate frames so the browser never paints
// a half-applied state:
//
//   request   guard class on            Idle     -> Guarding
//   frame 1   mutation                  Guarding -> Clearing
//   frame 2   guard class off           Clearing -> Idle
//
// Changes that need no guard go Idle -> Applying -> Idle in one frame.
// The machine only tracks phases; callers touch the DOM.

/// Current phase, carrying the pending target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<T> {
    Idle,
    /// Guard is on, mutation runs next frame.
    Guarding(T),
    /// Mutation runs next frame, no guard held.
    Applying(T),
    /// Mutation done, guard comes off next frame.
    Clearing,
}

/// What the caller must do on this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<T> {
    Nothing,
    Apply(T),
    ReleaseGuard,
}

#[derive(Debug)]
pub struct Choreography<T> {
    phase: Phase<T>,
}

impl<T: Copy> Default for Choreography<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Choreography<T> {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase<T> {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Queue `target` for the next frame. A newer request replaces a pending
    /// one. Returns true when the caller must add the guard class now.
    pub fn request(&mut self, target: T, guard: bool) -> bool {
        match self.phase {
            // Guard already on: keep it until after the new mutation.
            Phase::Guarding(_) | Phase::Clearing => {
                self.phase = Phase::Guarding(target);
                false
            }
            Phase::Idle | Phase::Applying(_) => {
                self.phase = if guard { Phase::Guarding(target) } else { Phase::Applying(target) };
                guard
            }
        }
    }

    /// Advance one frame.
    pub fn advance(&mut self) -> Step<T> {
        match self.phase {
            Phase::Idle => Step::Nothing,
            Phase::Guarding(target) => {
                self.phase = Phase::Clearing;
                Step::Apply(target)
            }
            Phase::Applying(target) => {
                self.phase = Phase::Idle;
                Step::Apply(target)
            }
            Phase::Clearing => {
                self.phase = Phase::Idle;
                Step::ReleaseGuard
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn guarded_change_takes_three_turns() {
        let mut c = Choreography::new();
        assert!(c.request(1, true));
        assert_eq!(c.phase(), Phase::Guarding(1));
        assert_eq!(c.advance(), Step::Apply(1));
        assert_eq!(c.phase(), Phase::Clearing);
        assert_eq!(c.advance(), Step::ReleaseGuard);
        assert_eq!(c.advance(), Step::Nothing);
        assert!(!c.is_pending());
    }

    #[test]
    fn unguarded_change_applies_in_one_frame() {
        let mut c = Choreography::new();
        assert!(!c.request(7, false));
        assert_eq!(c.advance(), Step::Apply(7));
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn newer_request_replaces_pending_target() {
        let mut c = Choreography::new();
        assert!(c.request(1, true));
        assert!(!c.request(2, true));
        assert_eq!(c.advance(), Step::Apply(2));
        assert_eq!(c.advance(), Step::ReleaseGuard);
    }

    #[test]
    fn request_while_clearing_keeps_guard() {
        let mut c = Choreography::new();
        c.request(1, true);
        c.advance();
        assert!(!c.request(2, false));
        assert_eq!(c.advance(), Step::Apply(2));
        assert_eq!(c.advance(), Step::ReleaseGuard);
    }
}
