//! Networking for the probe request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the single outbound GET and folds every way it can go wrong
//! into one classified outcome.

pub mod api;
