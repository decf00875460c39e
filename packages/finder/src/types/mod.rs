//! Data types for the finder library.

pub mod profile;
pub mod state;
