//! Application orchestration layer
//!
//! This module coordinates between the input, domain, and UI layers. The
//! controller is the single mutator of canvas state and the place host
//! integrations plug into.

pub mod controller;

pub use controller::{CanvasController, DeleteAffordance, RepaintHandle};
