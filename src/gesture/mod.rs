pub mod classifier;
pub mod debounce;
pub mod history;
pub mod label;

pub use classifier::{wrist_angles, FrameDecision, GestureClassifier};
pub use debounce::Debouncer;
pub use history::{OrientationHistory, SwipeTransition};
pub use label::GestureLabel;
