//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from controller logic
//! to improve reuse and testability.

pub mod host;
pub mod storage;
pub mod style;
