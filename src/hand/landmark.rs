use std::fmt;
use std::str::FromStr;

use super::geometry::project_to_pixels;
use crate::error::GestureError;

/// Hand landmark indices (21 points, wrist first, then thumb to pinky)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkIndex {
    pub const COUNT: usize = 21;

    pub fn from_index(index: usize) -> Option<Self> {
        use LandmarkIndex::*;
        const ALL: [LandmarkIndex; LandmarkIndex::COUNT] = [
            Wrist, ThumbCmc, ThumbMcp, ThumbIp, ThumbTip,
            IndexMcp, IndexPip, IndexDip, IndexTip,
            MiddleMcp, MiddlePip, MiddleDip, MiddleTip,
            RingMcp, RingPip, RingDip, RingTip,
            PinkyMcp, PinkyPip, PinkyDip, PinkyTip,
        ];
        ALL.get(index).copied()
    }
}

/// Screen-relative hand side as reported by the landmark source.
///
/// The video is mirrored upstream, so `Left` is the hand on the left of the
/// screen, not the user's anatomical left hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handedness {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Self::Left),
            "Right" => Ok(Self::Right),
            other => Err(GestureError::UnknownHandedness(other.to_string())),
        }
    }
}

/// Single landmark
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    /// Normalized X (0.0..1.0, left to right)
    pub x: f32,
    /// Normalized Y (0.0..1.0, top to bottom)
    pub y: f32,
    /// Relative depth, unused by the classifier
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Pixel coordinates, truncated toward zero
    pub fn to_pixel(&self, width: u32, height: u32) -> (i32, i32) {
        let (px, py) = project_to_pixels(self, width, height);
        (px as i32, py as i32)
    }
}

/// One detected hand: 21 landmarks plus its side
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    pub landmarks: [Landmark; LandmarkIndex::COUNT],
    pub handedness: Handedness,
}

impl Hand {
    pub fn new(handedness: Handedness, landmarks: [Landmark; LandmarkIndex::COUNT]) -> Self {
        Self {
            landmarks,
            handedness,
        }
    }

    /// Build a hand from raw `[x, y, z]` triples, rejecting anything that is
    /// not exactly one point per landmark role.
    pub fn from_points(handedness: Handedness, points: &[[f32; 3]]) -> Result<Self, GestureError> {
        if points.len() != LandmarkIndex::COUNT {
            return Err(GestureError::InvalidLandmarkSet {
                expected: LandmarkIndex::COUNT,
                actual: points.len(),
            });
        }
        let landmarks = std::array::from_fn(|i| {
            let [x, y, z] = points[i];
            Landmark::new(x, y, z)
        });
        Ok(Self::new(handedness, landmarks))
    }

    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[index as usize]
    }
}
