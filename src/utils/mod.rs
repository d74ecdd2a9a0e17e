//! Utility modules
//!
//! Small helpers shared by the browser backend.

pub mod offsets;

pub use offsets::utf16_offset;
