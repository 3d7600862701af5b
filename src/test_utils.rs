//! Synthetic hands for unit tests.
//!
//! Every landmark not listed explicitly sits at the image center, which makes
//! all comparisons against it fail (neither above nor left of anything).

use crate::hand::{Hand, Handedness, Landmark, LandmarkIndex, Orientation};

/// Build a hand from a sparse list of `(landmark, x, y)` overrides.
pub(crate) fn hand(side: Handedness, points: &[(LandmarkIndex, f32, f32)]) -> Hand {
    let mut landmarks = [Landmark::new(0.5, 0.5, 0.0); LandmarkIndex::COUNT];
    for &(index, x, y) in points {
        landmarks[index as usize] = Landmark::new(x, y, 0.0);
    }
    Hand::new(side, landmarks)
}

/// Wrist and middle knuckle placed for the requested orientation; fingers
/// left at the center so no finger rule fires.
pub(crate) fn oriented_hand(side: Handedness, orientation: Orientation) -> Hand {
    use LandmarkIndex::*;
    let (wrist, mcp) = match orientation {
        Orientation::Upward => ((0.5, 0.8), (0.5, 0.6)),
        Orientation::Leftward => ((0.6, 0.6), (0.4, 0.55)),
        Orientation::Rightward => ((0.4, 0.6), (0.6, 0.55)),
        Orientation::Unknown => ((0.5, 0.5), (0.5, 0.7)),
    };
    hand(side, &[(Wrist, wrist.0, wrist.1), (MiddleMcp, mcp.0, mcp.1)])
}

/// Upright hand, all four fingers extended and held together.
pub(crate) fn flat_open_hand(side: Handedness) -> Hand {
    use LandmarkIndex::*;
    hand(
        side,
        &[
            (Wrist, 0.50, 0.90),
            (ThumbCmc, 0.45, 0.85),
            (ThumbMcp, 0.42, 0.80),
            (ThumbIp, 0.40, 0.76),
            (ThumbTip, 0.38, 0.72),
            (IndexMcp, 0.47, 0.70),
            (IndexPip, 0.47, 0.60),
            (IndexDip, 0.47, 0.55),
            (IndexTip, 0.47, 0.50),
            (MiddleMcp, 0.50, 0.70),
            (MiddlePip, 0.50, 0.60),
            (MiddleDip, 0.50, 0.55),
            (MiddleTip, 0.50, 0.50),
            (RingMcp, 0.53, 0.70),
            (RingPip, 0.53, 0.60),
            (RingDip, 0.53, 0.55),
            (RingTip, 0.53, 0.50),
            (PinkyMcp, 0.56, 0.72),
            (PinkyPip, 0.56, 0.62),
            (PinkyDip, 0.56, 0.57),
            (PinkyTip, 0.56, 0.52),
        ],
    )
}

/// Same hand with every coordinate multiplied by `factor`.
pub(crate) fn scaled(hand: &Hand, factor: f32) -> Hand {
    let landmarks = hand
        .landmarks
        .map(|lm| Landmark::new(lm.x * factor, lm.y * factor, lm.z * factor));
    Hand::new(hand.handedness, landmarks)
}
