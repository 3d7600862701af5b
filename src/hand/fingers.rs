use super::landmark::{Hand, Handedness, LandmarkIndex};

/// Default maximum x spread between neighbouring fingertips of a flat hand
pub const FLAT_HAND_THRESHOLD: f32 = 0.04;

/// The four non-thumb fingers as (tip, pip, mcp)
const FINGERS: [(LandmarkIndex, LandmarkIndex, LandmarkIndex); 4] = [
    (LandmarkIndex::IndexTip, LandmarkIndex::IndexPip, LandmarkIndex::IndexMcp),
    (LandmarkIndex::MiddleTip, LandmarkIndex::MiddlePip, LandmarkIndex::MiddleMcp),
    (LandmarkIndex::RingTip, LandmarkIndex::RingPip, LandmarkIndex::RingMcp),
    (LandmarkIndex::PinkyTip, LandmarkIndex::PinkyPip, LandmarkIndex::PinkyMcp),
];

/// How the thumb is judged extended, relative to the thumb MCP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbRule {
    /// tip.x < mcp.x
    TipLeftOfMcp,
    /// tip.x > mcp.x
    TipRightOfMcp,
    /// tip.y < mcp.y
    TipAboveMcp,
}

/// How index..pinky are judged extended, relative to their own MCP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerRule {
    /// tip.y < mcp.y
    TipAboveMcp,
    /// tip.x < mcp.x
    TipLeftOfMcp,
}

/// Extended flags for thumb, index, middle, ring, pinky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerExtension(pub [bool; 5]);

impl FingerExtension {
    pub const THUMB: usize = 0;
    pub const INDEX: usize = 1;

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&e| e).count()
    }

    /// Exactly the given finger is extended
    pub fn only(&self, finger: usize) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, &extended)| extended == (i == finger))
    }

    pub fn only_thumb(&self) -> bool {
        self.only(Self::THUMB)
    }

    pub fn only_index(&self) -> bool {
        self.only(Self::INDEX)
    }
}

/// Per-finger extension using the given conventions.
///
/// Callers pick the conventions per branch; they are deliberately not unified.
pub fn extension_vector(hand: &Hand, thumb: ThumbRule, fingers: FingerRule) -> FingerExtension {
    let thumb_tip = hand.get(LandmarkIndex::ThumbTip);
    let thumb_mcp = hand.get(LandmarkIndex::ThumbMcp);

    let mut states = [false; 5];
    states[0] = match thumb {
        ThumbRule::TipLeftOfMcp => thumb_tip.x < thumb_mcp.x,
        ThumbRule::TipRightOfMcp => thumb_tip.x > thumb_mcp.x,
        ThumbRule::TipAboveMcp => thumb_tip.y < thumb_mcp.y,
    };
    for (state, &(tip, _, mcp)) in states[1..].iter_mut().zip(FINGERS.iter()) {
        let tip = hand.get(tip);
        let mcp = hand.get(mcp);
        *state = match fingers {
            FingerRule::TipAboveMcp => tip.y < mcp.y,
            FingerRule::TipLeftOfMcp => tip.x < mcp.x,
        };
    }
    FingerExtension(states)
}

/// All four fingers pointing up and held together.
pub fn is_flat_open_hand(hand: &Hand, threshold: f32) -> bool {
    let extended = FINGERS
        .iter()
        .all(|&(tip, pip, _)| hand.get(tip).y < hand.get(pip).y);
    if !extended {
        return false;
    }

    let tips_x: Vec<f32> = FINGERS.iter().map(|&(tip, _, _)| hand.get(tip).x).collect();
    tips_x.windows(2).all(|w| (w[0] - w[1]).abs() <= threshold)
}

/// Index straightened (tip above pip above mcp), the other three curled.
pub fn is_pointing_hand(hand: &Hand) -> bool {
    let tip = hand.get(LandmarkIndex::IndexTip);
    let pip = hand.get(LandmarkIndex::IndexPip);
    let mcp = hand.get(LandmarkIndex::IndexMcp);
    if !(tip.y < pip.y && pip.y < mcp.y) {
        return false;
    }
    FINGERS[1..]
        .iter()
        .all(|&(tip, pip, _)| hand.get(tip).y >= hand.get(pip).y)
}

/// Thumb tucked towards the hand's own side and all fingers folded below
/// their knuckles.
pub fn is_fist(hand: &Hand, side: Handedness) -> bool {
    let thumb_tip = hand.get(LandmarkIndex::ThumbTip);
    let thumb_mcp = hand.get(LandmarkIndex::ThumbMcp);
    let thumb_tucked = match side {
        Handedness::Left => thumb_tip.x < thumb_mcp.x,
        Handedness::Right => thumb_tip.x > thumb_mcp.x,
    };
    if !thumb_tucked {
        return false;
    }
    FINGERS
        .iter()
        .all(|&(tip, _, mcp)| hand.get(tip).y > hand.get(mcp).y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{flat_open_hand, hand};
    use LandmarkIndex::*;

    fn fist(side: Handedness, thumb_tip_x: f32) -> Hand {
        hand(
            side,
            &[
                (ThumbMcp, 0.5, 0.6),
                (ThumbTip, thumb_tip_x, 0.6),
                (IndexMcp, 0.45, 0.6),
                (IndexTip, 0.45, 0.7),
                (MiddleMcp, 0.5, 0.6),
                (MiddleTip, 0.5, 0.7),
                (RingMcp, 0.55, 0.6),
                (RingTip, 0.55, 0.7),
                (PinkyMcp, 0.6, 0.6),
                (PinkyTip, 0.6, 0.7),
            ],
        )
    }

    fn pointing() -> Hand {
        hand(
            Handedness::Right,
            &[
                (IndexMcp, 0.5, 0.6),
                (IndexPip, 0.5, 0.5),
                (IndexTip, 0.5, 0.4),
                (MiddlePip, 0.55, 0.6),
                (MiddleTip, 0.55, 0.65),
                (RingPip, 0.6, 0.6),
                (RingTip, 0.6, 0.65),
                (PinkyPip, 0.65, 0.6),
                (PinkyTip, 0.65, 0.65),
            ],
        )
    }

    #[test]
    fn test_flat_open_hand() {
        assert!(is_flat_open_hand(&flat_open_hand(Handedness::Left), FLAT_HAND_THRESHOLD));
    }

    #[test]
    fn test_flat_open_hand_spread_fingers() {
        let mut h = flat_open_hand(Handedness::Left);
        h.landmarks[PinkyTip as usize].x = 0.65;
        assert!(!is_flat_open_hand(&h, FLAT_HAND_THRESHOLD));
        // a looser threshold accepts the same hand
        assert!(is_flat_open_hand(&h, 0.2));
    }

    #[test]
    fn test_flat_open_hand_curled_finger() {
        let mut h = flat_open_hand(Handedness::Right);
        h.landmarks[RingTip as usize].y = 0.65;
        assert!(!is_flat_open_hand(&h, FLAT_HAND_THRESHOLD));
    }

    #[test]
    fn test_pointing_hand() {
        assert!(is_pointing_hand(&pointing()));
        assert!(!is_pointing_hand(&flat_open_hand(Handedness::Right)));
    }

    #[test]
    fn test_pointing_requires_strict_index_order() {
        let mut h = pointing();
        h.landmarks[IndexPip as usize].y = 0.65;
        assert!(!is_pointing_hand(&h));
    }

    #[test]
    fn test_fist_depends_on_side() {
        assert!(is_fist(&fist(Handedness::Left, 0.4), Handedness::Left));
        assert!(!is_fist(&fist(Handedness::Left, 0.4), Handedness::Right));
        assert!(is_fist(&fist(Handedness::Right, 0.6), Handedness::Right));
    }

    #[test]
    fn test_open_hand_is_not_fist() {
        assert!(!is_fist(&flat_open_hand(Handedness::Left), Handedness::Left));
    }

    #[test]
    fn test_extension_vector_flat_hand() {
        let h = flat_open_hand(Handedness::Left);
        let ext = extension_vector(&h, ThumbRule::TipLeftOfMcp, FingerRule::TipAboveMcp);
        assert_eq!(ext, FingerExtension([true; 5]));
        assert_eq!(ext.count(), 5);

        // same hand, thumb judged the other way round
        let ext = extension_vector(&h, ThumbRule::TipRightOfMcp, FingerRule::TipAboveMcp);
        assert_eq!(ext.0, [false, true, true, true, true]);
    }

    #[test]
    fn test_extension_vector_sideways_fingers() {
        let h = hand(
            Handedness::Right,
            &[
                (ThumbMcp, 0.6, 0.4),
                (ThumbTip, 0.6, 0.35),
                (IndexMcp, 0.5, 0.4),
                (IndexTip, 0.35, 0.4),
                (RingMcp, 0.5, 0.5),
                (RingTip, 0.55, 0.5),
            ],
        );
        let ext = extension_vector(&h, ThumbRule::TipAboveMcp, FingerRule::TipLeftOfMcp);
        assert_eq!(ext.0, [true, true, false, false, false]);
        assert_eq!(ext.count(), 2);
    }

    #[test]
    fn test_only_helpers() {
        assert!(FingerExtension([true, false, false, false, false]).only_thumb());
        assert!(!FingerExtension([true, true, false, false, false]).only_thumb());
        assert!(FingerExtension([false, true, false, false, false]).only_index());
        assert!(!FingerExtension([false; 5]).only_index());
        assert!(!FingerExtension([false; 5]).only_thumb());
    }
}
