//! Configuration module for tracepad
//!
//! Presentation parameters hosts may expose to users. Nothing here feeds
//! back into the core line state; a changed appearance only requires a
//! repaint.

pub mod appearance;

pub use appearance::Appearance;
