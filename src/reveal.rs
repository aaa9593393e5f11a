use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unseen,
    Seen,
}

/// Remembers which animated blocks have already entered the viewport.
///
/// A key moves from `Unseen` to `Seen` on its first intersecting event and
/// stays there; scrolling out and back in never replays the entrance.
#[derive(Debug, Default)]
pub struct RevealTracker {
    seen: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one intersection notification for `key`. Returns `true` only for
    /// the event that triggers the entrance.
    pub fn observe(&mut self, key: &str, intersecting: bool) -> bool {
        if !intersecting || self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string())
    }

    pub fn state(&self, key: &str) -> RevealState {
        if self.seen.contains(key) {
            RevealState::Seen
        } else {
            RevealState::Unseen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_across_scroll_in_out() {
        let mut tracker = RevealTracker::new();
        let events = [true, false, true, false, true, true];
        let fired = events
            .iter()
            .filter(|&&intersecting| tracker.observe("about", intersecting))
            .count();
        assert_eq!(fired, 1);
        assert_eq!(tracker.state("about"), RevealState::Seen);
    }

    #[test]
    fn test_state_reports_seen_for_remounted_block() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.state("projects/0"), RevealState::Unseen);
        assert!(tracker.observe("projects/0", true));
        // a block mounted again later starts from the recorded state
        assert_eq!(tracker.state("projects/0"), RevealState::Seen);
        assert!(!tracker.observe("projects/0", true));
    }

    #[test]
    fn test_leaving_before_entering_does_not_fire() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe("skills", false));
        assert_eq!(tracker.state("skills"), RevealState::Unseen);
        assert!(tracker.observe("skills", true));
    }

    #[test]
    fn test_keys_are_independent_of_order() {
        let mut forward = RevealTracker::new();
        let mut backward = RevealTracker::new();
        let keys = ["experience/0", "experience/1", "projects/0", "contact/form"];

        let f = keys.iter().filter(|k| forward.observe(k, true)).count();
        let b = keys.iter().rev().filter(|k| backward.observe(k, true)).count();
        assert_eq!(f, keys.len());
        assert_eq!(b, keys.len());

        // interleaved replays never re-trigger
        for k in keys.iter().chain(keys.iter().rev()) {
            assert!(!forward.observe(k, false));
            assert!(!forward.observe(k, true));
        }
        assert_eq!(forward.seen.len(), keys.len());
    }
}
