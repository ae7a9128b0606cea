pub mod taps;
pub mod touch;

pub use taps::{ReleaseOutcome, Tap, TapRecognizer};
pub use touch::{TouchEvent, TouchPhase};
