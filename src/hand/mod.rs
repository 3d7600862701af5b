pub mod fingers;
pub mod geometry;
pub mod landmark;

pub use fingers::{
    extension_vector, is_fist, is_flat_open_hand, is_pointing_hand, FingerExtension, FingerRule,
    ThumbRule, FLAT_HAND_THRESHOLD,
};
pub use geometry::{angle_degrees, classify_orientation, project_to_pixels, Orientation};
pub use landmark::{Hand, Handedness, Landmark, LandmarkIndex};
