use std::cell::Cell;

/// Identity of one fetch cycle. A settled retrieval may only publish its
/// result while its token is still the tracker's current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleToken(u64);

impl CycleToken {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Version counter for the request cycles of one component instance.
#[derive(Debug, Default)]
pub struct CycleTracker {
    current: Cell<u64>,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new cycle, superseding whatever was active
    pub fn begin(&self) -> CycleToken {
        CycleToken(self.bump())
    }

    /// Supersede the active cycle without opening another (unmount)
    pub fn invalidate(&self) {
        self.bump();
    }

    pub fn is_current(&self, token: CycleToken) -> bool {
        self.current.get() == token.0
    }

    fn bump(&self) -> u64 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_makes_token_current() {
        let tracker = CycleTracker::new();
        let token = tracker.begin();
        assert!(tracker.is_current(token));
    }

    #[test]
    fn test_new_cycle_supersedes_old() {
        let tracker = CycleTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalidate_leaves_no_current_cycle() {
        let tracker = CycleTracker::new();
        let token = tracker.begin();
        tracker.invalidate();

        assert!(!tracker.is_current(token));
        // A later cycle never reuses an invalidated token
        let next = tracker.begin();
        assert!(next.get() > token.get() + 1);
    }
}
