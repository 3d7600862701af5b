use tracing::debug;

use super::history::{OrientationHistory, SwipeTransition};
use super::label::GestureLabel;
use crate::config::ClassifierConfig;
use crate::hand::{
    angle_degrees, classify_orientation, extension_vector, is_flat_open_hand, FingerRule, Hand,
    Handedness, LandmarkIndex, Orientation, ThumbRule,
};

/// Per-frame result before the cross-hand merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameDecision {
    /// Label left by the last check that wrote one, across all hands
    pub working: GestureLabel,
    /// A left hand was upright, flat and open
    pub left_open: bool,
    /// A right hand (not leftward) was flat and open
    pub right_open: bool,
}

impl FrameDecision {
    /// Merge the per-hand results into the frame's label.
    ///
    /// An open hand on either side acts as the enabling pose for whatever the
    /// working label is. The left side is consulted first.
    pub fn resolve(&self) -> GestureLabel {
        if self.left_open && !self.working.is_none() {
            return self.working;
        }
        // Legacy `Drawing` rule sat here: a "Pointing" working label with no
        // left fist. Nothing ever produces Pointing or sets the fist flag, so
        // the rule never matches and `Drawing` is never returned.
        if self.right_open && !self.working.is_none() {
            return self.working;
        }
        GestureLabel::None
    }
}

/// Stateful per-session gesture classifier.
///
/// Owns the left-hand orientation history; feed it one session's frames in
/// arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureClassifier {
    config: ClassifierConfig,
    history: OrientationHistory,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            history: OrientationHistory::new(),
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.clone())
    }

    pub fn history(&self) -> &OrientationHistory {
        &self.history
    }

    pub fn reset(&mut self) {
        self.history.reset();
    }

    /// Classify one frame
    pub fn classify(&mut self, hands: &[Hand]) -> GestureLabel {
        self.evaluate(hands).resolve()
    }

    /// Run the per-hand checks for one frame, in input order, without the
    /// final merge.
    pub fn evaluate(&mut self, hands: &[Hand]) -> FrameDecision {
        let mut decision = FrameDecision::default();
        for hand in hands {
            let orientation = classify_orientation(hand);
            debug!("{} hand is {}", hand.handedness, orientation);
            match hand.handedness {
                Handedness::Left => self.left_hand(hand, orientation, &mut decision),
                Handedness::Right => self.right_hand(hand, orientation, &mut decision),
            }
        }
        decision
    }

    fn left_hand(&mut self, hand: &Hand, orientation: Orientation, decision: &mut FrameDecision) {
        if orientation == Orientation::Upward {
            if is_flat_open_hand(hand, self.config.flat_hand_threshold) {
                decision.left_open = true;
            }
            let ext = extension_vector(hand, ThumbRule::TipLeftOfMcp, FingerRule::TipAboveMcp);
            if ext.only_thumb() {
                decision.working = GestureLabel::SwipeLeft;
            }
        }

        match self.history.transition(orientation) {
            Some(SwipeTransition::Right) => {
                debug!("left hand swipe right: {:?} -> {}", self.history, orientation);
                decision.working = GestureLabel::SwipeRight;
            }
            Some(SwipeTransition::Left) => {
                debug!("left hand swipe left: {:?} -> {}", self.history, orientation);
                decision.working = GestureLabel::SwipeLeft;
            }
            None => {}
        }

        self.history.push(orientation);
    }

    fn right_hand(&self, hand: &Hand, orientation: Orientation, decision: &mut FrameDecision) {
        if orientation == Orientation::Leftward {
            // fingers point sideways here, so they extend along x
            let ext = extension_vector(hand, ThumbRule::TipAboveMcp, FingerRule::TipLeftOfMcp);
            decision.working = GestureLabel::option(ext.count());
            return;
        }

        if is_flat_open_hand(hand, self.config.flat_hand_threshold) {
            decision.right_open = true;
        } else {
            decision.working = self.zoom(hand);
        }

        let ext = extension_vector(hand, ThumbRule::TipRightOfMcp, FingerRule::TipAboveMcp);
        if ext.only_index() {
            decision.working = GestureLabel::SwipeRight;
        }
    }

    /// Pinched-together fingertips zoom out, spread fingertips zoom in.
    fn zoom(&self, hand: &Hand) -> GestureLabel {
        let angles = wrist_angles(hand);
        let out_max = &self.config.zoom_out_max_deg;
        let in_min = &self.config.zoom_in_min_deg;

        if angles.iter().zip(out_max).all(|(a, max)| a < max) {
            GestureLabel::ZoomOut
        } else if angles.iter().zip(in_min).all(|(a, min)| a > min) {
            GestureLabel::ZoomIn
        } else {
            GestureLabel::None
        }
    }
}

/// Angles at the wrist between neighbouring fingertips: thumb-index,
/// index-middle, middle-ring, ring-pinky.
pub fn wrist_angles(hand: &Hand) -> [f32; 4] {
    use LandmarkIndex::*;
    let wrist = hand.get(Wrist);
    let tips = [ThumbTip, IndexTip, MiddleTip, RingTip, PinkyTip];
    std::array::from_fn(|i| angle_degrees(hand.get(tips[i]), hand.get(tips[i + 1]), wrist))
}
