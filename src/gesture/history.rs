use crate::hand::Orientation;

/// Swipe direction implied by an orientation transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeTransition {
    Left,
    Right,
}

/// Left-hand orientation memory: the previous two frames that had a left hand.
///
/// Frames without a left hand do not advance it, so entries can be arbitrarily
/// old.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrientationHistory {
    prev: Option<Orientation>,
    prev_prev: Option<Orientation>,
}

impl OrientationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prev(&self) -> Option<Orientation> {
        self.prev
    }

    pub fn prev_prev(&self) -> Option<Orientation> {
        self.prev_prev
    }

    /// Swipe implied by moving to `current`.
    ///
    /// Rightward after Leftward, directly or with one Rightward/Upward frame
    /// in between, is a right swipe; the mirror sequence is a left swipe.
    /// Right is checked first.
    pub fn transition(&self, current: Orientation) -> Option<SwipeTransition> {
        use Orientation::*;
        if Self::crosses(self.prev_prev, self.prev, current, Leftward, Rightward) {
            Some(SwipeTransition::Right)
        } else if Self::crosses(self.prev_prev, self.prev, current, Rightward, Leftward) {
            Some(SwipeTransition::Left)
        } else {
            None
        }
    }

    fn crosses(
        prev_prev: Option<Orientation>,
        prev: Option<Orientation>,
        current: Orientation,
        from: Orientation,
        to: Orientation,
    ) -> bool {
        if current != to {
            return false;
        }
        prev == Some(from)
            || (prev_prev == Some(from)
                && (prev == Some(to) || prev == Some(Orientation::Upward)))
    }

    pub fn push(&mut self, current: Orientation) {
        self.prev_prev = self.prev;
        self.prev = Some(current);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
