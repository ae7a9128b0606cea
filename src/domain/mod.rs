//! Domain logic and core data structures
//!
//! This module contains pure drawing-surface logic that is independent
//! of the host input framework and of any rendering backend.

pub mod geometry;
pub mod hit;
pub mod store;

pub use geometry::{Line, Point};
pub use store::{LineStore, TouchId};
