//! Shared probe state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component layer wraps `ProbeState` in a Leptos signal; the struct
//! itself stays plain so the lifecycle and settle rules test natively.

pub mod probe;
