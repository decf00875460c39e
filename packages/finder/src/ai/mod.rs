//! Model implementations for the finder library.
//!
//! This module provides reference implementations of the
//! `GroundedModel` trait. Users can use these directly or implement
//! their own.

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiModel, DEFAULT_MODEL};
