//! Utility helpers shared across probe modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate motion math and presentation values from the
//! component layer so the observable contract stays natively testable.

pub mod color;
pub mod transition;
