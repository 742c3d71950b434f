//! Press/Release Edge Detection
//!
//! For hosts that only answer "is this held right now". The detector keeps
//! the set held on the previous tick and diffs it against the current one.

use std::collections::BTreeSet;

/// Items that changed state between two ticks, each list sorted ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transitions<T> {
    /// Not held last tick, held now
    pub pressed: Vec<T>,
    /// Held last tick, not held now
    pub released: Vec<T>,
}

impl<T> Transitions<T> {
    /// True when nothing changed
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }
}

impl<T> Default for Transitions<T> {
    fn default() -> Self {
        Self {
            pressed: Vec::new(),
            released: Vec::new(),
        }
    }
}

/// Held-state snapshot differ
#[derive(Debug, Clone)]
pub struct EdgeDetector<T: Ord + Copy> {
    held: BTreeSet<T>,
}

impl<T: Ord + Copy> EdgeDetector<T> {
    /// Create a detector with nothing held
    pub fn new() -> Self {
        Self {
            held: BTreeSet::new(),
        }
    }

    /// Record this tick's held set and return what changed since the last one
    pub fn advance<I>(&mut self, held_now: I) -> Transitions<T>
    where
        I: IntoIterator<Item = T>,
    {
        let now: BTreeSet<T> = held_now.into_iter().collect();

        let transitions = Transitions {
            pressed: now.difference(&self.held).copied().collect(),
            released: self.held.difference(&now).copied().collect(),
        };

        self.held = now;
        transitions
    }

    /// Check if an item was held on the last tick
    pub fn is_held(&self, item: &T) -> bool {
        self.held.contains(item)
    }

    /// Items held on the last tick, ascending
    pub fn held(&self) -> impl Iterator<Item = &T> {
        self.held.iter()
    }

    /// Forget all held state (next tick reports everything held as pressed)
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl<T: Ord + Copy> Default for EdgeDetector<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys::PhysicalKey;

    #[test]
    fn test_first_tick_reports_presses() {
        let mut detector = EdgeDetector::new();

        let t = detector.advance([PhysicalKey::B, PhysicalKey::A]);
        assert_eq!(t.pressed, vec![PhysicalKey::A, PhysicalKey::B]);
        assert!(t.released.is_empty());
        assert!(detector.is_held(&PhysicalKey::A));
    }

    #[test]
    fn test_release_detected_once() {
        let mut detector = EdgeDetector::new();

        detector.advance([PhysicalKey::A, PhysicalKey::ShiftLeft]);

        let t = detector.advance([PhysicalKey::ShiftLeft]);
        assert_eq!(t.released, vec![PhysicalKey::A]);
        assert!(t.pressed.is_empty());

        // Still not held on the next tick: no second release
        let t = detector.advance([PhysicalKey::ShiftLeft]);
        assert!(t.is_empty());
    }

    #[test]
    fn test_press_and_release_in_same_tick() {
        let mut detector = EdgeDetector::new();

        detector.advance([PhysicalKey::A]);
        let t = detector.advance([PhysicalKey::B]);

        assert_eq!(t.pressed, vec![PhysicalKey::B]);
        assert_eq!(t.released, vec![PhysicalKey::A]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut detector = EdgeDetector::new();

        let t = detector.advance([PhysicalKey::A, PhysicalKey::A]);
        assert_eq!(t.pressed, vec![PhysicalKey::A]);
    }

    #[test]
    fn test_reset() {
        let mut detector = EdgeDetector::new();

        detector.advance([PhysicalKey::A]);
        detector.reset();

        assert_eq!(detector.held().count(), 0);
        let t = detector.advance([PhysicalKey::A]);
        assert_eq!(t.pressed, vec![PhysicalKey::A]);
    }
}
