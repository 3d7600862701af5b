use std::fmt;

use super::landmark::{Hand, Landmark, LandmarkIndex};

/// Stand-in for a vanishing horizontal component of the wrist-to-knuckle
/// vector.
const SLOPE_EPSILON: f32 = 1e-5;

/// Coarse direction of the wrist → middle knuckle axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Upward,
    Leftward,
    Rightward,
    Unknown,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upward => "upward",
            Self::Leftward => "leftward",
            Self::Rightward => "rightward",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angle at `vertex` between the rays towards `p1` and `p2`, in degrees.
///
/// Works in the image plane (x, y). Degenerate rays give 0.
pub fn angle_degrees(p1: &Landmark, p2: &Landmark, vertex: &Landmark) -> f32 {
    let v1 = (p1.x - vertex.x, p1.y - vertex.y);
    let v2 = (p2.x - vertex.x, p2.y - vertex.y);
    let m1 = v1.0.hypot(v1.1);
    let m2 = v2.0.hypot(v2.1);
    if m1 == 0.0 || m2 == 0.0 {
        return 0.0;
    }
    let cos = (v1.0 * v2.0 + v1.1 * v2.1) / (m1 * m2);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Normalized landmark → pixel space, unrounded
pub fn project_to_pixels(landmark: &Landmark, width: u32, height: u32) -> (f32, f32) {
    (landmark.x * width as f32, landmark.y * height as f32)
}

fn knuckle_vector(hand: &Hand) -> (f32, f32) {
    let wrist = hand.get(LandmarkIndex::Wrist);
    let mcp = hand.get(LandmarkIndex::MiddleMcp);
    (mcp.x - wrist.x, mcp.y - wrist.y)
}

fn is_upward(dx: f32, dy: f32) -> bool {
    let dx = if dx.abs() < SLOPE_EPSILON {
        SLOPE_EPSILON.copysign(dx)
    } else {
        dx
    };
    let slope = dy / dx;
    slope.abs() > 1.0 && dy < 0.0
}

fn is_sideways(dx: f32, dy: f32) -> bool {
    if dx == 0.0 {
        return false;
    }
    let slope = (dy / dx).abs();
    slope > 0.0 && slope < 1.0
}

/// Classify the hand's orientation from the wrist → middle MCP slope.
///
/// The checks run in a fixed order and a later match replaces an earlier one.
pub fn classify_orientation(hand: &Hand) -> Orientation {
    let (dx, dy) = knuckle_vector(hand);

    let mut orientation = Orientation::Unknown;
    if is_upward(dx, dy) {
        orientation = Orientation::Upward;
    }
    if is_sideways(dx, dy) && dx < 0.0 {
        orientation = Orientation::Leftward;
    }
    if is_sideways(dx, dy) && dx > 0.0 {
        orientation = Orientation::Rightward;
    }
    orientation
}
