pub mod pointer;

pub use pointer::{DirectionSmoother, PointerSmoother};
